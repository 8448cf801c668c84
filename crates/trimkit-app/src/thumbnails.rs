//! Synthetic thumbnails for the demo: a hue sweep across the asset.

use egui::ecolor::Hsva;
use egui::{Color32, ColorImage};
use trimkit_core::{Asset, RationalTime};
use trimkit_ui::ThumbnailProvider;

/// Renders one gradient frame per tile, hue following the time.
#[derive(Debug, Default)]
pub struct GradientThumbnails {
    rendered: usize,
}

impl GradientThumbnails {
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl ThumbnailProvider for GradientThumbnails {
    fn render(&mut self, asset: &Asset, time: RationalTime, size: [usize; 2]) -> Option<ColorImage> {
        let [w, h] = size;
        if w == 0 || h == 0 || asset.is_empty() {
            return None;
        }
        let hue = (time.to_seconds_f64() / asset.duration_seconds()).clamp(0.0, 1.0) as f32;

        let mut image = ColorImage::new(size, Color32::BLACK);
        for y in 0..h {
            let value = 0.45 + 0.5 * (1.0 - y as f32 / h as f32);
            for x in 0..w {
                let saturation = 0.5 + 0.4 * (x as f32 / w as f32);
                image.pixels[y * w + x] = Hsva::new(hue, saturation, value, 1.0).into();
            }
        }
        self.rendered += 1;
        Some(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_requested_size() {
        let asset = Asset::new("clip", RationalTime::from_secs(10));
        let mut thumbs = GradientThumbnails::default();
        let image = thumbs
            .render(&asset, RationalTime::from_secs(5), [16, 9])
            .unwrap();
        assert_eq!(image.size, [16, 9]);
        assert_eq!(image.pixels.len(), 144);
        assert_eq!(thumbs.rendered(), 1);
    }

    #[test]
    fn test_empty_requests_are_declined() {
        let mut thumbs = GradientThumbnails::default();
        let still = Asset::new("still", RationalTime::ZERO);
        assert!(thumbs.render(&still, RationalTime::ZERO, [16, 9]).is_none());
        let clip = Asset::new("clip", RationalTime::from_secs(1));
        assert!(thumbs.render(&clip, RationalTime::ZERO, [0, 9]).is_none());
    }
}
