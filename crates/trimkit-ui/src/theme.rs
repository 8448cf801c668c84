//! Trimmer colors and metrics.

use egui::Color32;
use trimkit_core::Palette;

/// Fixed metrics of the trimmer chrome.
pub struct Metrics;

impl Metrics {
    // ── Handles ────────────────────────────────────────────────
    pub const HANDLE_RADIUS: f32 = 2.0;
    pub const KNOB_WIDTH: f32 = 2.0;
    pub const KNOB_HEIGHT_RATIO: f32 = 0.3;
    /// Extra horizontal grab area around each handle.
    pub const HANDLE_SLOP: f32 = 6.0;

    // ── Position bar ───────────────────────────────────────────
    pub const BAR_RADIUS: f32 = 1.0;

    // ── Labels ─────────────────────────────────────────────────
    pub const LABEL_LINE_WIDTH: f32 = 1.0;
    pub const LABEL_LINE_HEIGHT: f32 = 5.0;
    /// Space between the handle top and the label line.
    pub const LABEL_GAP: f32 = 2.0;
    /// Height reserved above the filmstrip for labels.
    pub const LABEL_AREA: f32 = 24.0;
}

/// Resolved colors of a trimmer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmerColors {
    pub main: Color32,
    pub handle: Color32,
    pub position_bar: Color32,
    pub mask: Color32,
    pub label: Color32,
    pub placeholder: Color32,
}

impl TrimmerColors {
    pub fn from_palette(palette: &Palette, mask_alpha: f32) -> Self {
        let [r, g, b] = palette.main;
        let [hr, hg, hb] = palette.handle;
        let [pr, pg, pb] = palette.position_bar;
        let alpha = (mask_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            main: Color32::from_rgb(r, g, b),
            handle: Color32::from_rgb(hr, hg, hb),
            position_bar: Color32::from_rgb(pr, pg, pb),
            mask: with_alpha(Color32::WHITE, alpha),
            label: Color32::from_gray(220),
            placeholder: Color32::from_rgb(45, 45, 55),
        }
    }
}

impl Default for TrimmerColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default(), 0.7)
    }
}

/// Return a color with replaced alpha.
pub const fn with_alpha(c: Color32, a: u8) -> Color32 {
    Color32::from_rgba_premultiplied(
        (c.r() as u16 * a as u16 / 255) as u8,
        (c.g() as u16 * a as u16 / 255) as u8,
        (c.b() as u16 * a as u16 / 255) as u8,
        a,
    )
}
