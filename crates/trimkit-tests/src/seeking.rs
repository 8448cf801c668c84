//! Integration tests for the position indicator: seeking and scroll settling.

use proptest::prelude::*;
use std::sync::Arc;
use trimkit_core::{Asset, RationalTime, TrimmerConfig};
use trimkit_ui::{
    AssetPreview, FilmstripPreview, HandleEdge, ScrollPhase, Trimmer, TrimmerEvent,
};

// ── Helpers ────────────────────────────────────────────────────

/// 120 s asset; `max_visible` seconds fill the 600 px filmstrip.
fn trimmer(max_visible: Option<f64>) -> Trimmer {
    let config = TrimmerConfig {
        max_visible_duration: max_visible,
        ..Default::default()
    };
    let mut trimmer = Trimmer::with_preview(FilmstripPreview::new(max_visible), &config);
    trimmer.set_width(630.0);
    trimmer.set_asset(Some(Arc::new(Asset::new(
        "match.mp4",
        RationalTime::from_secs(120),
    ))));
    trimmer
}

fn narrow(trimmer: &mut Trimmer, left: f32, right: f32) {
    trimmer.begin_drag(HandleEdge::Left);
    trimmer.update_drag(left);
    trimmer.end_drag();
    trimmer.begin_drag(HandleEdge::Right);
    trimmer.update_drag(right);
    trimmer.end_drag();
    trimmer.take_events();
}

// ── Seek ───────────────────────────────────────────────────────

#[test]
fn seek_maps_time_to_offset() {
    let mut t = trimmer(None);
    t.seek(RationalTime::from_secs(30));
    assert!((t.position_offset() - 150.0).abs() < 1e-3);
    assert!((t.position_time().unwrap().to_seconds_f64() - 30.0).abs() < 1e-3);
}

#[test]
fn seek_is_idempotent() {
    let mut t = trimmer(None);
    narrow(&mut t, 40.0, -60.0);
    t.seek(RationalTime::from_seconds_f64(57.3));
    let first = t.position_offset();
    t.seek(RationalTime::from_seconds_f64(57.3));
    assert_eq!(t.position_offset(), first);
}

#[test]
fn seek_outside_selection_clamps_to_handles() {
    let mut t = trimmer(None);
    narrow(&mut t, 100.0, -100.0);
    t.seek(RationalTime::ZERO);
    assert_eq!(t.position_offset(), 0.0);
    t.seek(RationalTime::from_secs(120));
    // Inner span 400 px minus the 3 px bar.
    assert_eq!(t.position_offset(), 397.0);
}

#[test]
fn seek_with_touching_handles_pins_indicator() {
    let mut t = trimmer(None);
    t.set_min_duration(0.0);
    narrow(&mut t, 300.0, -1000.0);
    t.seek(RationalTime::from_secs(90));
    assert_eq!(t.position_offset(), 0.0);
}

#[test]
fn seek_accounts_for_scroll() {
    let mut t = trimmer(Some(30.0));
    assert!(t.preview_mut().scroll_by(400.0));
    // 20 px per second: 25 s sits 100 px into the visible strip.
    t.seek(RationalTime::from_secs(25));
    assert!((t.position_offset() - 100.0).abs() < 1e-3);
}

// ── Scroll settling ────────────────────────────────────────────

#[test]
fn repeated_scrolls_delay_the_snap() {
    let mut t = trimmer(Some(30.0));
    t.seek(RationalTime::from_secs(10));

    t.preview_mut().scroll_by(50.0);
    t.scrolled(1.0);
    t.preview_mut().scroll_by(50.0);
    t.scrolled(1.15);

    // The first task would have fired here.
    assert!(!t.poll(1.25));
    assert!(t.position_offset() > 0.0);
    assert!(t.poll(1.4));
    assert_eq!(t.position_offset(), 0.0);
    assert_eq!(t.scroll_phase(), ScrollPhase::Idle);

    let events = t.take_events();
    assert_eq!(
        events.as_slice(),
        &[TrimmerEvent::DragStarted, TrimmerEvent::DragStarted]
    );
}

#[test]
fn scroll_moves_selection_not_handles() {
    let mut t = trimmer(Some(30.0));
    let before = t.selected_range().unwrap();
    t.preview_mut().scroll_by(1000.0);
    t.scrolled(0.0);
    t.scroll_drag_ended(false);

    let after = t.selected_range().unwrap();
    assert_eq!(t.left_offset(), 0.0);
    assert_eq!(after.duration, before.duration);
    assert!((after.start.to_seconds_f64() - 50.0).abs() < 1e-3);
    match t.take_events().as_slice() {
        [TrimmerEvent::DragStarted, TrimmerEvent::PositionSettled(time)] => {
            assert!((time.to_seconds_f64() - 50.0).abs() < 1e-3);
        }
        other => panic!("unexpected events {:?}", other),
    }
}

#[test]
fn reset_rewinds_filmstrip() {
    let mut t = trimmer(Some(30.0));
    t.preview_mut().scroll_by(700.0);
    t.reset();
    assert_eq!(t.preview().scroll_offset(), 0.0);
    assert!((t.start_time().unwrap().to_seconds_f64()).abs() < 1e-3);
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn seek_stays_between_handles(
        left in 0.0_f32..600.0,
        right in -600.0_f32..0.0,
        seconds in -30.0_f64..150.0,
    ) {
        let mut t = trimmer(None);
        t.set_min_duration(0.0);
        narrow(&mut t, left, right);
        t.seek(RationalTime::from_seconds_f64(seconds));

        let (lo, hi) = t.position_bounds();
        prop_assert!(t.position_offset() >= lo);
        prop_assert!(t.position_offset() <= hi);

        let once = t.position_offset();
        t.seek(RationalTime::from_seconds_f64(seconds));
        prop_assert_eq!(t.position_offset(), once);
    }
}
