//! egui rendering and input handling for [`Trimmer`].

use crate::handle::{handle_cursor, hit_test_handle, HandleEdge};
use crate::layout::TrimmerLayout;
use crate::preview::AssetPreview;
use crate::scroll::MomentumStep;
use crate::theme::Metrics;
use crate::trimmer::{Trimmer, TrimmerEvents};
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Vec2};
use std::time::Duration;

/// Pointer and clock readings for one frame.
struct FrameInput {
    now: f64,
    dt: f32,
    pointer_velocity: Vec2,
    wheel: Vec2,
}

impl<P: AssetPreview> Trimmer<P> {
    /// Draw the trimmer across the available width and handle this frame's
    /// input. Returns the events produced during the frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> TrimmerEvents {
        let size = Vec2::new(ui.available_width(), Metrics::LABEL_AREA + self.height);
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let body = Rect::from_min_size(
            response.rect.min + Vec2::new(0.0, Metrics::LABEL_AREA),
            Vec2::new(size.x, self.height),
        );
        self.set_width(body.width());

        let input = ui.input(|i| FrameInput {
            now: i.time,
            dt: i.stable_dt,
            pointer_velocity: i.pointer.velocity(),
            wheel: i.smooth_scroll_delta,
        });
        self.poll(input.now);

        // --- Gestures ---
        let layout = self.layout(body);
        if response.drag_started() {
            // Hit test where the press began, not where the drag was recognized.
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pos) = origin {
                self.begin_gesture(&layout, pos);
            }
        }
        if response.dragged() {
            let dx = response.drag_delta().x;
            if let Some(edge) = self.active_drag() {
                self.drag_by(dx);
                ui.ctx().set_cursor_icon(handle_cursor(edge));
            } else if self.strip_drag && dx != 0.0 && self.preview.scroll_by(-dx) {
                self.scrolled(input.now);
            }
        }
        if response.drag_stopped() {
            if self.active_drag().is_some() {
                self.end_drag();
            } else if self.strip_drag {
                self.strip_drag = false;
                let decelerate = self.momentum.launch(-input.pointer_velocity.x);
                self.scroll_drag_ended(decelerate);
            }
        }

        self.step_momentum(input.dt, input.now);
        if response.hovered() && !response.dragged() {
            self.handle_wheel(input.wheel, input.now);
        } else if self.wheel_active {
            self.wheel_active = false;
            self.scroll_drag_ended(false);
        }

        if self.active_drag().is_none() {
            if let Some(edge) = response.hover_pos().and_then(|pos| {
                hit_test_handle(layout.left_handle, layout.right_handle, pos, Metrics::HANDLE_SLOP)
            }) {
                ui.ctx().set_cursor_icon(handle_cursor(edge));
            }
        }

        // --- Paint ---
        let layout = self.layout(body);
        self.paint(ui.ctx(), &painter, &layout);

        if self.momentum.is_active() || self.wheel_active {
            ui.ctx().request_repaint();
        } else if let Some(task) = self.pending_settle() {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(task.remaining(input.now)));
        }

        self.take_events()
    }

    fn begin_gesture(&mut self, layout: &TrimmerLayout, pos: Pos2) {
        if let Some(edge) =
            hit_test_handle(layout.left_handle, layout.right_handle, pos, Metrics::HANDLE_SLOP)
        {
            self.begin_drag(edge);
        } else if layout.filmstrip.contains(pos) {
            self.momentum.stop();
            self.strip_drag = true;
        }
    }

    fn step_momentum(&mut self, dt: f32, now: f64) {
        match self.momentum.step(dt) {
            MomentumStep::Moving(delta) => {
                if self.preview.scroll_by(delta) {
                    self.scrolled(now);
                } else {
                    // Hit the end of the content.
                    self.momentum.stop();
                    self.deceleration_ended();
                }
            }
            MomentumStep::Stopped => self.deceleration_ended(),
            MomentumStep::Idle => {}
        }
    }

    fn handle_wheel(&mut self, wheel: Vec2, now: f64) {
        let delta = if wheel.x != 0.0 { wheel.x } else { wheel.y };
        if delta != 0.0 {
            self.momentum.stop();
            if self.preview.scroll_by(-delta) {
                self.scrolled(now);
                self.wheel_active = true;
            }
        } else if self.wheel_active {
            self.wheel_active = false;
            self.scroll_drag_ended(false);
        }
    }

    fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, layout: &TrimmerLayout) {
        let colors = self.colors;

        let strip_painter = painter.with_clip_rect(layout.filmstrip);
        self.preview.paint(ctx, &strip_painter, layout.filmstrip);

        painter.rect_filled(layout.left_mask, Rounding::ZERO, colors.mask);
        painter.rect_filled(layout.right_mask, Rounding::ZERO, colors.mask);

        for edge in [HandleEdge::Left, HandleEdge::Right] {
            let (handle, knob) = match edge {
                HandleEdge::Left => (layout.left_handle, layout.left_knob),
                HandleEdge::Right => (layout.right_handle, layout.right_knob),
            };
            painter.rect_filled(handle, Rounding::same(Metrics::HANDLE_RADIUS), colors.main);
            painter.rect_filled(knob, Rounding::same(Metrics::KNOB_WIDTH / 2.0), colors.handle);
        }

        painter.rect_filled(
            layout.position_bar,
            Rounding::same(Metrics::BAR_RADIUS),
            colors.position_bar,
        );

        for edge in [HandleEdge::Left, HandleEdge::Right] {
            let Some(text) = self.label_text(edge) else {
                continue;
            };
            painter.rect_filled(layout.label_line(edge), Rounding::ZERO, colors.label);
            painter.text(
                layout.label_anchor(edge),
                Align2::CENTER_BOTTOM,
                text,
                FontId::proportional(self.label_font_size),
                colors.label,
            );
        }
    }
}
