//! Trimmer geometry.
//!
//! All sub-elements are positioned relative to the widget body: the
//! filmstrip is inset by one handle width on each side, the handles sit at
//! their offsets, the masks cover everything outside the handle centers and
//! the position bar hangs off the left handle's trailing edge.

use crate::handle::HandleEdge;
use crate::theme::Metrics;
use egui::{Pos2, Rect, Vec2};

/// Handle and indicator positions, relative to the body's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    pub left_x: f32,
    pub right_x: f32,
    pub position_offset: f32,
    pub handle_width: f32,
    pub bar_width: f32,
}

/// Absolute rectangles of every trimmer sub-element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmerLayout {
    pub body: Rect,
    pub filmstrip: Rect,
    pub left_handle: Rect,
    pub right_handle: Rect,
    pub left_knob: Rect,
    pub right_knob: Rect,
    pub left_mask: Rect,
    pub right_mask: Rect,
    pub position_bar: Rect,
    pub left_label_line: Rect,
    pub right_label_line: Rect,
}

impl TrimmerLayout {
    pub fn compute(body: Rect, g: &HandleGeometry) -> Self {
        let height = body.height();
        let handle_size = Vec2::new(g.handle_width, height);

        let filmstrip = Rect::from_min_max(
            Pos2::new(body.left() + g.handle_width, body.top()),
            Pos2::new(
                (body.right() - g.handle_width).max(body.left() + g.handle_width),
                body.bottom(),
            ),
        );

        let left_handle =
            Rect::from_min_size(Pos2::new(body.left() + g.left_x, body.top()), handle_size);
        let right_handle =
            Rect::from_min_size(Pos2::new(body.left() + g.right_x, body.top()), handle_size);

        let knob_size = Vec2::new(Metrics::KNOB_WIDTH, height * Metrics::KNOB_HEIGHT_RATIO);
        let left_knob = Rect::from_center_size(left_handle.center(), knob_size);
        let right_knob = Rect::from_center_size(right_handle.center(), knob_size);

        let left_mask = Rect::from_min_max(
            body.left_top(),
            Pos2::new(left_handle.center().x, body.bottom()),
        );
        let right_mask = Rect::from_min_max(
            Pos2::new(right_handle.center().x, body.top()),
            body.right_bottom(),
        );

        let position_bar = Rect::from_min_size(
            Pos2::new(left_handle.right() + g.position_offset, body.top()),
            Vec2::new(g.bar_width, height),
        );

        Self {
            body,
            filmstrip,
            left_handle,
            right_handle,
            left_knob,
            right_knob,
            left_mask,
            right_mask,
            position_bar,
            left_label_line: label_line(&left_handle),
            right_label_line: label_line(&right_handle),
        }
    }

    pub fn label_line(&self, edge: HandleEdge) -> Rect {
        match edge {
            HandleEdge::Left => self.left_label_line,
            HandleEdge::Right => self.right_label_line,
        }
    }

    /// Bottom-center point of a handle's timestamp label.
    pub fn label_anchor(&self, edge: HandleEdge) -> Pos2 {
        let line = self.label_line(edge);
        Pos2::new(line.center().x, line.top() - Metrics::LABEL_GAP)
    }
}

fn label_line(handle: &Rect) -> Rect {
    let bottom = handle.top() - Metrics::LABEL_GAP;
    Rect::from_center_size(
        Pos2::new(handle.center().x, bottom - Metrics::LABEL_LINE_HEIGHT / 2.0),
        Vec2::new(Metrics::LABEL_LINE_WIDTH, Metrics::LABEL_LINE_HEIGHT),
    )
}
