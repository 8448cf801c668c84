//! Trimmer state: handle offsets, position indicator and selected range.
//!
//! Horizontal positions here are relative to the widget's left edge. The
//! left handle's left edge sits at `left_offset`, the right handle's left
//! edge at `width + right_offset - handle_width`, and the position bar's left
//! edge at the left handle's trailing edge plus `position_offset`.

use crate::handle::{clamp_left_offset, clamp_right_offset, HandleDrag, HandleEdge};
use crate::layout::{HandleGeometry, TrimmerLayout};
use crate::listener::TrimmerEvent;
use crate::preview::{AssetPreview, FilmstripPreview};
use crate::scroll::{DeferredTask, Momentum, ScrollPhase, ScrollSync};
use crate::theme::TrimmerColors;
use egui::{Color32, Rect};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use trimkit_core::{format_timestamp, Asset, RationalTime, TimeRange, TrimmerConfig};

/// Events produced during one frame.
pub type TrimmerEvents = SmallVec<[TrimmerEvent; 4]>;

/// Video trimming widget: a filmstrip with two handles and a position bar.
pub struct Trimmer<P: AssetPreview = FilmstripPreview> {
    pub(crate) preview: P,
    asset: Option<Arc<Asset>>,
    pub(crate) handle_width: f32,
    pub(crate) bar_width: f32,
    pub(crate) height: f32,
    pub(crate) label_font_size: f32,
    min_duration: f64,
    pub(crate) colors: TrimmerColors,
    width: f32,
    left_offset: f32,
    right_offset: f32,
    position_offset: f32,
    drag: Option<HandleDrag>,
    left_label_visible: bool,
    right_label_visible: bool,
    pub(crate) scroll: ScrollSync,
    pub(crate) momentum: Momentum,
    pub(crate) strip_drag: bool,
    pub(crate) wheel_active: bool,
    events: TrimmerEvents,
}

impl Trimmer<FilmstripPreview> {
    pub fn new(config: &TrimmerConfig) -> Self {
        Self::with_preview(FilmstripPreview::new(config.max_visible_duration), config)
    }
}

impl<P: AssetPreview> Trimmer<P> {
    pub fn with_preview(preview: P, config: &TrimmerConfig) -> Self {
        Self {
            preview,
            asset: None,
            handle_width: config.handle_width,
            bar_width: config.position_bar_width,
            height: config.height,
            label_font_size: config.label_font_size,
            min_duration: config.min_duration,
            colors: TrimmerColors::from_palette(&config.palette, config.mask_alpha),
            width: 0.0,
            left_offset: 0.0,
            right_offset: 0.0,
            position_offset: 0.0,
            drag: None,
            left_label_visible: false,
            right_label_visible: false,
            scroll: ScrollSync::new(config.settle_delay),
            momentum: Momentum::default(),
            strip_drag: false,
            wheel_active: false,
            events: TrimmerEvents::new(),
        }
    }

    /// Apply a new configuration, keeping the asset and offsets.
    pub fn apply_config(&mut self, config: &TrimmerConfig) {
        self.handle_width = config.handle_width;
        self.bar_width = config.position_bar_width;
        self.height = config.height;
        self.label_font_size = config.label_font_size;
        self.set_min_duration(config.min_duration);
        self.colors = TrimmerColors::from_palette(&config.palette, config.mask_alpha);
        self.scroll.set_delay(config.settle_delay);
        let width = self.width;
        self.set_width(width);
        self.refit_handles();
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut P {
        &mut self.preview
    }

    // ── Asset ──────────────────────────────────────────────────

    pub fn asset(&self) -> Option<&Arc<Asset>> {
        self.asset.as_ref()
    }

    /// Load a new asset (or clear it). Handles return to the full range.
    pub fn set_asset(&mut self, asset: Option<Arc<Asset>>) {
        match &asset {
            Some(a) => debug!(asset = %a.id, duration = %a.duration, "Trimmer asset loaded"),
            None => debug!("Trimmer asset cleared"),
        }
        self.preview.set_asset(asset.clone());
        self.asset = asset;
        self.drag = None;
        self.hide_labels();
        self.scroll.settle();
        self.momentum.stop();
        self.strip_drag = false;
        self.wheel_active = false;
        self.position_offset = 0.0;
        self.reset_handle_positions();
    }

    /// Rewind the filmstrip and return both handles to the full range.
    pub fn reset(&mut self) {
        debug!("Trimmer reset");
        self.preview.reset_scroll();
        self.momentum.stop();
        self.reset_handle_positions();
    }

    fn reset_handle_positions(&mut self) {
        self.left_offset = 0.0;
        self.right_offset = 0.0;
    }

    // ── Parameters ─────────────────────────────────────────────

    pub fn min_duration(&self) -> f64 {
        self.min_duration
    }

    /// Shortest selectable range in seconds. Negative or non-finite values are ignored.
    pub fn set_min_duration(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds >= 0.0 {
            self.min_duration = seconds;
        } else {
            warn!(seconds, "Ignoring invalid minimum trim duration");
        }
    }

    pub fn colors(&self) -> &TrimmerColors {
        &self.colors
    }

    pub fn set_main_color(&mut self, color: Color32) {
        self.colors.main = color;
    }

    pub fn set_handle_color(&mut self, color: Color32) {
        self.colors.handle = color;
    }

    pub fn set_position_bar_color(&mut self, color: Color32) {
        self.colors.position_bar = color;
    }

    pub fn handle_width(&self) -> f32 {
        self.handle_width
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Lay the trimmer out at a new width.
    ///
    /// Offsets are kept while they still fit; otherwise the handles are pulled
    /// back inside the new bounds, left first.
    pub fn set_width(&mut self, width: f32) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let resized = width != self.width;
        self.width = width;
        self.preview
            .set_visible_width((self.width - 2.0 * self.handle_width).max(0.0));
        if resized {
            self.refit_handles();
        }
    }

    fn refit_handles(&mut self) {
        let gap = self.min_handle_gap();
        let (left, right) = (self.left_offset, self.right_offset);
        self.left_offset = clamp_left_offset(left, self.right_handle_x(), self.handle_width, gap);
        self.right_offset = clamp_right_offset(
            right,
            self.left_handle_x(),
            self.width,
            self.handle_width,
            gap,
        );
        let (lo, hi) = self.position_bounds();
        self.position_offset = self.position_offset.max(lo).min(hi);
        if (left, right) != (self.left_offset, self.right_offset) {
            debug!(
                width = self.width,
                left = self.left_offset,
                right = self.right_offset,
                "Handles refitted to new width"
            );
        }
    }

    // ── Geometry ───────────────────────────────────────────────

    pub fn left_offset(&self) -> f32 {
        self.left_offset
    }

    pub fn right_offset(&self) -> f32 {
        self.right_offset
    }

    pub fn position_offset(&self) -> f32 {
        self.position_offset
    }

    /// Left edge of the left handle.
    pub fn left_handle_x(&self) -> f32 {
        self.left_offset
    }

    /// Left edge of the right handle.
    pub fn right_handle_x(&self) -> f32 {
        self.width + self.right_offset - self.handle_width
    }

    /// Range of the position offset: between the handles' inner edges,
    /// leaving room for the bar itself.
    pub fn position_bounds(&self) -> (f32, f32) {
        let inner = self.right_handle_x() - (self.left_handle_x() + self.handle_width);
        (0.0, (inner - self.bar_width).max(0.0))
    }

    /// Minimum distance between the handles in pixels.
    pub fn min_handle_gap(&self) -> f32 {
        match &self.asset {
            Some(asset) if !asset.is_empty() => {
                (self.min_duration * self.preview.content_width() as f64 / asset.duration_seconds())
                    as f32
            }
            _ => 0.0,
        }
    }

    pub fn layout(&self, body: Rect) -> TrimmerLayout {
        TrimmerLayout::compute(
            body,
            &HandleGeometry {
                left_x: self.left_handle_x(),
                right_x: self.right_handle_x(),
                position_offset: self.position_offset,
                handle_width: self.handle_width,
                bar_width: self.bar_width,
            },
        )
    }

    // ── Times ──────────────────────────────────────────────────

    /// Selected start time for the current asset.
    pub fn start_time(&self) -> Option<RationalTime> {
        self.preview
            .time_at(self.left_handle_x() + self.preview.scroll_offset())
    }

    /// Selected end time for the current asset.
    pub fn end_time(&self) -> Option<RationalTime> {
        self.preview
            .time_at(self.right_handle_x() + self.preview.scroll_offset() - self.handle_width)
    }

    pub fn selected_range(&self) -> Option<TimeRange> {
        Some(TimeRange::from_start_end(self.start_time()?, self.end_time()?))
    }

    /// Asset time under the position bar.
    pub fn position_time(&self) -> Option<RationalTime> {
        self.preview.time_at(
            self.left_handle_x() + self.position_offset + self.preview.scroll_offset(),
        )
    }

    /// Move the position bar to `time`, keeping it between the handles.
    pub fn seek(&mut self, time: RationalTime) {
        let Some(position) = self.preview.position_of(time) else {
            return;
        };
        let offset = position - self.preview.scroll_offset() - self.left_handle_x();
        let (lo, hi) = self.position_bounds();
        self.position_offset = offset.max(lo).min(hi);
    }

    // ── Handle drags ───────────────────────────────────────────

    pub fn active_drag(&self) -> Option<HandleEdge> {
        self.drag.as_ref().map(|d| d.edge)
    }

    /// A pan gesture began on a handle. Any filmstrip motion stops first.
    pub fn begin_drag(&mut self, edge: HandleEdge) {
        self.momentum.stop();
        self.strip_drag = false;
        self.wheel_active = false;
        self.scroll.settle();
        let baseline = match edge {
            HandleEdge::Left => self.left_offset,
            HandleEdge::Right => self.right_offset,
        };
        self.drag = Some(HandleDrag::new(edge, baseline));
        self.set_label_visible(edge, true);
        self.events.push(TrimmerEvent::DragStarted);
        self.emit_position(false);
    }

    /// The active pan gesture moved to a total horizontal `translation`.
    pub fn update_drag(&mut self, translation: f32) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.translation = translation;
        let (edge, target) = (drag.edge, drag.target());
        let gap = self.min_handle_gap();

        match edge {
            HandleEdge::Left => {
                self.left_offset =
                    clamp_left_offset(target, self.right_handle_x(), self.handle_width, gap);
            }
            HandleEdge::Right => {
                self.right_offset = clamp_right_offset(
                    target,
                    self.left_handle_x(),
                    self.width,
                    self.handle_width,
                    gap,
                );
            }
        }
        trace!(
            ?edge,
            target,
            gap,
            left = self.left_offset,
            right = self.right_offset,
            "Handle drag"
        );

        let anchor = match edge {
            HandleEdge::Left => self.start_time(),
            HandleEdge::Right => self.end_time(),
        };
        if let Some(time) = anchor {
            self.seek(time);
        }
        self.emit_position(false);
        self.emit_range();
    }

    /// Add `delta` to the active gesture's translation.
    pub fn drag_by(&mut self, delta: f32) {
        if let Some(translation) = self.drag.as_ref().map(|d| d.translation + delta) {
            self.update_drag(translation);
        }
    }

    /// The active pan gesture ended or was cancelled.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.hide_labels();
        self.emit_range();
        self.emit_position(true);
    }

    // ── Labels ─────────────────────────────────────────────────

    pub fn label_visible(&self, edge: HandleEdge) -> bool {
        match edge {
            HandleEdge::Left => self.left_label_visible,
            HandleEdge::Right => self.right_label_visible,
        }
    }

    /// Timestamp shown above a handle while it is dragged.
    pub fn label_text(&self, edge: HandleEdge) -> Option<String> {
        if !self.label_visible(edge) {
            return None;
        }
        let time = match edge {
            HandleEdge::Left => self.start_time(),
            HandleEdge::Right => self.end_time(),
        }?;
        Some(format_timestamp(time.to_seconds_f64()))
    }

    fn set_label_visible(&mut self, edge: HandleEdge, visible: bool) {
        match edge {
            HandleEdge::Left => self.left_label_visible = visible,
            HandleEdge::Right => self.right_label_visible = visible,
        }
    }

    fn hide_labels(&mut self) {
        self.left_label_visible = false;
        self.right_label_visible = false;
    }

    // ── Scroll synchronization ─────────────────────────────────

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.scroll.phase()
    }

    pub fn pending_settle(&self) -> Option<DeferredTask> {
        self.scroll.pending()
    }

    /// The filmstrip scrolled at input time `now`.
    pub fn scrolled(&mut self, now: f64) {
        self.scroll.scrolled(now);
        self.events.push(TrimmerEvent::DragStarted);
    }

    /// A filmstrip drag was released.
    pub fn scroll_drag_ended(&mut self, will_decelerate: bool) {
        if !will_decelerate {
            self.scroll_settled();
        }
    }

    /// Kinetic scrolling came to rest.
    pub fn deceleration_ended(&mut self) {
        self.scroll_settled();
    }

    /// Run the settle task if it is due. Returns `true` when it ran.
    pub fn poll(&mut self, now: f64) -> bool {
        if !self.scroll.poll(now) {
            return false;
        }
        debug!("Scroll settled, snapping position bar");
        self.position_offset = 0.0;
        true
    }

    fn scroll_settled(&mut self) {
        self.scroll.settle();
        self.position_offset = 0.0;
        self.emit_position(true);
    }

    // ── Events ─────────────────────────────────────────────────

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> TrimmerEvents {
        std::mem::take(&mut self.events)
    }

    fn emit_position(&mut self, settled: bool) {
        if let Some(time) = self.position_time() {
            self.events.push(if settled {
                TrimmerEvent::PositionSettled(time)
            } else {
                TrimmerEvent::PositionChanged(time)
            });
        }
    }

    fn emit_range(&mut self) {
        if let Some(range) = self.selected_range() {
            self.events.push(TrimmerEvent::HandleRangeChanged {
                start: range.start,
                end: range.end(),
            });
        }
    }
}
