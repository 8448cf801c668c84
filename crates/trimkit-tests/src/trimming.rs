//! Integration tests for handle dragging.
//!
//! Drives `Trimmer` through whole gestures and checks the selected range and
//! the notifications a host receives.

use proptest::prelude::*;
use std::sync::Arc;
use trimkit_core::{Asset, RationalTime, TrimmerConfig};
use trimkit_ui::{
    dispatch_all, AssetPreview, FilmstripPreview, HandleEdge, Trimmer, TrimmerEvent,
    TrimmerListener,
};

// ── Helpers ────────────────────────────────────────────────────

const WIDTH: f32 = 630.0;

/// 120 s over a 600 px filmstrip: 5 px per second.
fn trimmer(min_duration: f64) -> Trimmer {
    let config = TrimmerConfig {
        min_duration,
        ..Default::default()
    };
    let mut trimmer = Trimmer::with_preview(FilmstripPreview::fit_to_width(), &config);
    trimmer.set_width(WIDTH);
    trimmer.set_asset(Some(Arc::new(Asset::new(
        "interview.mov",
        RationalTime::from_secs(120),
    ))));
    trimmer
}

fn drag(trimmer: &mut Trimmer, edge: HandleEdge, translation: f32) {
    trimmer.begin_drag(edge);
    trimmer.update_drag(translation);
    trimmer.end_drag();
}

fn secs(time: Option<RationalTime>) -> f64 {
    time.map(|t| t.to_seconds_f64()).unwrap_or(f64::NAN)
}

#[derive(Default)]
struct Log {
    started: usize,
    changed: Vec<f64>,
    settled: Vec<f64>,
    ranges: Vec<(f64, f64)>,
}

impl TrimmerListener for Log {
    fn position_changed(&mut self, time: RationalTime) {
        self.changed.push(time.to_seconds_f64());
    }
    fn position_settled(&mut self, time: RationalTime) {
        self.settled.push(time.to_seconds_f64());
    }
    fn handle_range_changed(&mut self, start: RationalTime, end: RationalTime) {
        self.ranges.push((start.to_seconds_f64(), end.to_seconds_f64()));
    }
    fn drag_started(&mut self) {
        self.started += 1;
    }
}

// ── Scenario ───────────────────────────────────────────────────

#[test]
fn left_handle_stops_at_minimum_duration() {
    let mut t = trimmer(10.0);
    t.begin_drag(HandleEdge::Left);
    t.update_drag(1000.0);

    // rightHandleX (615) - handleWidth (15) - 10 s * 5 px/s
    assert!((t.left_offset() - 550.0).abs() < 1e-3);
    assert!((secs(t.start_time()) - 110.0).abs() < 1e-3);
    assert!((secs(t.end_time()) - 120.0).abs() < 1e-3);
    t.end_drag();
}

#[test]
fn start_time_tracks_offset() {
    let mut t = trimmer(10.0);
    for offset in [0.0_f32, 5.0, 137.5, 300.0] {
        t.begin_drag(HandleEdge::Left);
        t.update_drag(offset - t.left_offset());
        t.end_drag();
        assert!((secs(t.start_time()) - offset as f64 / 5.0).abs() < 1e-3);
    }
}

#[test]
fn handles_cannot_cross() {
    let mut t = trimmer(0.0);
    drag(&mut t, HandleEdge::Right, -400.0);
    drag(&mut t, HandleEdge::Left, 1000.0);
    let range = t.selected_range().unwrap();
    assert!(range.start <= range.end());
    assert!((range.start.to_seconds_f64() - 40.0).abs() < 1e-3);
}

#[test]
fn listener_sees_full_gesture() {
    let mut t = trimmer(1.0);
    t.begin_drag(HandleEdge::Right);
    t.update_drag(-50.0);
    t.update_drag(-100.0);
    t.end_drag();

    let mut log = Log::default();
    dispatch_all(&t.take_events(), &mut log);
    assert_eq!(log.started, 1);
    // Start plus one per update.
    assert_eq!(log.changed.len(), 3);
    assert_eq!(log.settled.len(), 1);
    // One per update plus the final range.
    assert_eq!(log.ranges.len(), 3);
    let (start, end) = *log.ranges.last().unwrap();
    assert!((start - 0.0).abs() < 1e-3);
    assert!((end - 100.0).abs() < 1e-3);
    // Right drags park the indicator on the end time.
    assert!((log.settled[0] - 100.0).abs() < 1.0);
}

#[test]
fn new_asset_resets_handles() {
    let mut t = trimmer(5.0);
    drag(&mut t, HandleEdge::Left, 120.0);
    drag(&mut t, HandleEdge::Right, -80.0);
    t.set_asset(Some(Arc::new(Asset::new("b-roll.mov", RationalTime::from_secs(45)))));
    assert_eq!(t.left_offset(), 0.0);
    assert_eq!(t.right_offset(), 0.0);
    assert!((secs(t.end_time()) - 45.0).abs() < 1e-3);
}

#[test]
fn explicit_reset_restores_full_range() {
    let mut t = trimmer(5.0);
    drag(&mut t, HandleEdge::Left, 60.0);
    drag(&mut t, HandleEdge::Right, -60.0);
    t.reset();
    assert_eq!(t.left_offset(), 0.0);
    assert_eq!(t.right_offset(), 0.0);
    let range = t.selected_range().unwrap();
    assert!((range.duration.to_seconds_f64() - 120.0).abs() < 1e-3);
}

#[test]
fn cleared_asset_emits_no_times() {
    let mut t = trimmer(5.0);
    t.set_asset(None);
    t.begin_drag(HandleEdge::Left);
    t.update_drag(40.0);
    t.end_drag();
    let events = t.take_events();
    assert_eq!(events.as_slice(), &[TrimmerEvent::DragStarted]);
    assert!(t.selected_range().is_none());
}

#[test]
fn shrinking_min_duration_frees_handles() {
    let mut t = trimmer(60.0);
    drag(&mut t, HandleEdge::Left, 1000.0);
    assert!((secs(t.start_time()) - 60.0).abs() < 1e-3);
    t.set_min_duration(30.0);
    drag(&mut t, HandleEdge::Left, 1000.0);
    assert!((secs(t.start_time()) - 90.0).abs() < 1e-3);
}

// ── Properties ─────────────────────────────────────────────────

fn gesture() -> impl Strategy<Value = (bool, f32)> {
    (any::<bool>(), -800.0_f32..800.0)
}

proptest! {
    #[test]
    fn drag_sequences_keep_invariants(
        min_duration in 0.0_f64..60.0,
        gestures in prop::collection::vec(gesture(), 1..24),
    ) {
        let mut t = trimmer(min_duration);
        for (left, translation) in gestures {
            let edge = if left { HandleEdge::Left } else { HandleEdge::Right };
            drag(&mut t, edge, translation);

            prop_assert!(t.left_offset() >= 0.0);
            prop_assert!(t.right_offset() <= 0.0);
            let range = t.selected_range().unwrap();
            // One pixel is 0.2 s.
            prop_assert!(range.duration.to_seconds_f64() >= min_duration - 0.2);
        }
    }

    #[test]
    fn scrolled_drag_sequences_keep_min_duration(
        min_duration in 0.0_f64..25.0,
        scroll in 0.0_f32..1800.0,
        gestures in prop::collection::vec(gesture(), 1..16),
    ) {
        // 30 s across 600 px: 20 px per second over 2400 px of content.
        let config = TrimmerConfig {
            min_duration,
            max_visible_duration: Some(30.0),
            ..Default::default()
        };
        let mut t = Trimmer::with_preview(FilmstripPreview::new(Some(30.0)), &config);
        t.set_width(WIDTH);
        t.set_asset(Some(Arc::new(Asset::new(
            "interview.mov",
            RationalTime::from_secs(120),
        ))));
        t.preview_mut().scroll_by(scroll);

        for (left, translation) in gestures {
            let edge = if left { HandleEdge::Left } else { HandleEdge::Right };
            drag(&mut t, edge, translation);

            let range = t.selected_range().unwrap();
            prop_assert!(range.start <= range.end());
            // One pixel is 0.05 s.
            prop_assert!(range.duration.to_seconds_f64() >= min_duration - 0.05);
            prop_assert!(range.end().to_seconds_f64() <= 120.0 + 1e-6);
        }
    }

    #[test]
    fn reset_after_any_drags_is_full_range(
        gestures in prop::collection::vec(gesture(), 0..12),
    ) {
        let mut t = trimmer(3.0);
        for (left, translation) in gestures {
            let edge = if left { HandleEdge::Left } else { HandleEdge::Right };
            drag(&mut t, edge, translation);
        }
        t.reset();
        prop_assert_eq!(t.left_offset(), 0.0);
        prop_assert_eq!(t.right_offset(), 0.0);
    }
}
