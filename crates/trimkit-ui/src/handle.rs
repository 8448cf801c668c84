//! Trim handle drag controller.
//!
//! Offsets are measured from each handle's resting position: the left handle
//! moves right with a positive offset, the right handle moves left with a
//! negative one.

use egui::{CursorIcon, Pos2, Rect};

/// Which end of the selected range a handle marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEdge {
    Left,
    Right,
}

/// Active handle drag.
#[derive(Debug, Clone)]
pub struct HandleDrag {
    pub edge: HandleEdge,
    /// Handle offset captured when the drag began.
    pub baseline: f32,
    /// Total horizontal translation since the drag began.
    pub translation: f32,
}

impl HandleDrag {
    pub fn new(edge: HandleEdge, baseline: f32) -> Self {
        Self {
            edge,
            baseline,
            translation: 0.0,
        }
    }

    /// Unclamped offset the pointer is asking for.
    pub fn target(&self) -> f32 {
        self.baseline + self.translation
    }
}

/// Allowed range of the left offset, `[0, max]`.
///
/// The left handle may not come closer to the right handle than one handle
/// width plus `min_gap`.
pub fn left_offset_bounds(right_handle_x: f32, handle_width: f32, min_gap: f32) -> (f32, f32) {
    (0.0, (right_handle_x - handle_width - min_gap).max(0.0))
}

/// Allowed range of the right offset, `[min, 0]`.
pub fn right_offset_bounds(
    left_handle_x: f32,
    width: f32,
    handle_width: f32,
    min_gap: f32,
) -> (f32, f32) {
    (
        (2.0 * handle_width - width + left_handle_x + min_gap).min(0.0),
        0.0,
    )
}

/// Clamp a requested left offset against the right handle's position.
pub fn clamp_left_offset(target: f32, right_handle_x: f32, handle_width: f32, min_gap: f32) -> f32 {
    let (lo, hi) = left_offset_bounds(right_handle_x, handle_width, min_gap);
    target.max(lo).min(hi)
}

/// Clamp a requested right offset against the left handle's position.
pub fn clamp_right_offset(
    target: f32,
    left_handle_x: f32,
    width: f32,
    handle_width: f32,
    min_gap: f32,
) -> f32 {
    let (lo, hi) = right_offset_bounds(left_handle_x, width, handle_width, min_gap);
    target.min(hi).max(lo)
}

/// Hit test a position against both handles, widened by `slop` on each side.
pub fn hit_test_handle(left: Rect, right: Rect, pos: Pos2, slop: f32) -> Option<HandleEdge> {
    let left = left.expand2(egui::vec2(slop, 0.0));
    let right = right.expand2(egui::vec2(slop, 0.0));
    match (left.contains(pos), right.contains(pos)) {
        // Overlapping slop: pick the closer handle.
        (true, true) => {
            if (pos.x - left.center().x).abs() <= (pos.x - right.center().x).abs() {
                Some(HandleEdge::Left)
            } else {
                Some(HandleEdge::Right)
            }
        }
        (true, false) => Some(HandleEdge::Left),
        (false, true) => Some(HandleEdge::Right),
        (false, false) => None,
    }
}

/// Cursor icon for a handle.
pub fn handle_cursor(edge: HandleEdge) -> CursorIcon {
    match edge {
        HandleEdge::Left => CursorIcon::ResizeWest,
        HandleEdge::Right => CursorIcon::ResizeEast,
    }
}
