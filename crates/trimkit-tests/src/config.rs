//! Integration tests for configuration-driven trimmers.

use egui::Color32;
use std::sync::Arc;
use trimkit_core::{Asset, RationalTime, TrimkitError, TrimmerConfig};
use trimkit_ui::{AssetPreview, HandleEdge, Trimmer};

fn asset(seconds: i64) -> Option<Arc<Asset>> {
    Some(Arc::new(Asset::new("clip", RationalTime::from_secs(seconds))))
}

#[test]
fn json_config_shapes_the_widget() {
    let json = br#"{
        "handle_width": 20,
        "min_duration": 4,
        "max_visible_duration": null,
        "palette": { "main": [0, 200, 255] }
    }"#;
    let config = TrimmerConfig::from_json(json).unwrap();
    let mut t = Trimmer::new(&config);
    t.set_width(440.0);
    t.set_asset(asset(80));

    assert_eq!(t.handle_width(), 20.0);
    assert_eq!(t.preview().visible_width(), 400.0);
    assert_eq!(t.preview().content_width(), 400.0);
    assert_eq!(t.colors().main, Color32::from_rgb(0, 200, 255));
    // Unnamed palette entries keep their defaults.
    assert_eq!(t.colors().position_bar, Color32::WHITE);

    t.begin_drag(HandleEdge::Left);
    t.update_drag(1000.0);
    let range = t.selected_range().unwrap();
    assert!((range.duration.to_seconds_f64() - 4.0).abs() < 1e-3);
}

#[test]
fn default_config_scrolls_long_assets() {
    let mut t = Trimmer::new(&TrimmerConfig::default());
    t.set_width(330.0);
    t.set_asset(asset(60));
    // 15 s visible across 300 px.
    assert_eq!(t.preview().content_width(), 1200.0);
    assert!((t.end_time().unwrap().to_seconds_f64() - 15.0).abs() < 1e-3);
}

#[test]
fn rejected_config_reports_field() {
    let err = TrimmerConfig::from_json(br#"{ "mask_alpha": 1.5 }"#).unwrap_err();
    match err {
        TrimkitError::InvalidParameter(msg) => assert!(msg.contains("mask_alpha")),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn applying_config_keeps_selection() {
    let mut t = Trimmer::new(&TrimmerConfig {
        max_visible_duration: None,
        ..Default::default()
    });
    t.set_width(630.0);
    t.set_asset(asset(120));
    t.begin_drag(HandleEdge::Left);
    t.update_drag(100.0);
    t.end_drag();

    t.apply_config(&TrimmerConfig {
        max_visible_duration: None,
        settle_delay: 0.5,
        palette: trimkit_core::Palette {
            handle: [10, 10, 10],
            ..Default::default()
        },
        ..Default::default()
    });
    assert_eq!(t.left_offset(), 100.0);
    assert_eq!(t.colors().handle, Color32::from_rgb(10, 10, 10));

    t.scrolled(0.0);
    assert!((t.pending_settle().unwrap().due() - 0.5).abs() < 1e-9);
}
