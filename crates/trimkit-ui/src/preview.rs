//! Asset preview: the scrollable filmstrip behind the handles.
//!
//! Pixel positions are measured along the filmstrip content, from 0 at the
//! start of the asset to `content_width()` at its end.

use egui::{ColorImage, Pos2, Rect, Rounding, TextureHandle, TextureOptions, Vec2};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use trimkit_core::{Asset, RationalTime};

/// Narrow interface the trimmer needs from its filmstrip.
pub trait AssetPreview {
    /// Display a new asset (or none) and rewind the scroll position.
    fn set_asset(&mut self, asset: Option<Arc<Asset>>);

    /// Width of the visible part of the filmstrip.
    fn set_visible_width(&mut self, width: f32);

    fn visible_width(&self) -> f32;

    /// Total width of the filmstrip content.
    fn content_width(&self) -> f32;

    /// Horizontal scroll offset of the content.
    fn scroll_offset(&self) -> f32;

    /// Scroll by `delta` points. Returns `true` when the offset changed.
    fn scroll_by(&mut self, delta: f32) -> bool;

    fn reset_scroll(&mut self);

    /// Asset time at a content pixel.
    fn time_at(&self, pixel: f32) -> Option<RationalTime>;

    /// Content pixel of an asset time.
    fn position_of(&self, time: RationalTime) -> Option<f32>;

    /// Draw the visible thumbnails into `rect`.
    fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect);
}

/// Source of thumbnail images, typically backed by a decoder.
pub trait ThumbnailProvider {
    /// Render a frame of `asset` at `time`, scaled to `size` pixels.
    ///
    /// `None` leaves a placeholder tile; the provider is asked again on a
    /// later frame.
    fn render(&mut self, asset: &Asset, time: RationalTime, size: [usize; 2]) -> Option<ColorImage>;
}

/// Thumbnail aspect ratio of the filmstrip tiles.
const TILE_ASPECT: f32 = 16.0 / 9.0;

/// Filmstrip preview with linear time mapping and lazily rendered thumbnails.
pub struct FilmstripPreview {
    asset: Option<Arc<Asset>>,
    visible_width: f32,
    scroll_offset: f32,
    /// Longest duration shown without scrolling; `None` fits the asset.
    max_visible_duration: Option<f64>,
    provider: Option<Box<dyn ThumbnailProvider>>,
    tiles: HashMap<usize, TextureHandle>,
    tile_width: f32,
    placeholder: egui::Color32,
}

impl FilmstripPreview {
    pub fn new(max_visible_duration: Option<f64>) -> Self {
        Self {
            asset: None,
            visible_width: 0.0,
            scroll_offset: 0.0,
            max_visible_duration: max_visible_duration.filter(|d| d.is_finite() && *d > 0.0),
            provider: None,
            tiles: HashMap::new(),
            tile_width: 0.0,
            placeholder: egui::Color32::from_rgb(45, 45, 55),
        }
    }

    /// A preview that always fits the whole asset into the visible width.
    pub fn fit_to_width() -> Self {
        Self::new(None)
    }

    pub fn with_provider(mut self, provider: Box<dyn ThumbnailProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn set_placeholder_color(&mut self, color: egui::Color32) {
        self.placeholder = color;
    }

    pub fn asset(&self) -> Option<&Arc<Asset>> {
        self.asset.as_ref()
    }

    fn duration_seconds(&self) -> Option<f64> {
        self.asset
            .as_ref()
            .filter(|a| !a.is_empty())
            .map(|a| a.duration_seconds())
    }

    fn max_scroll(&self) -> f32 {
        (self.content_width() - self.visible_width).max(0.0)
    }
}

impl Default for FilmstripPreview {
    fn default() -> Self {
        Self::new(Some(15.0))
    }
}

impl AssetPreview for FilmstripPreview {
    fn set_asset(&mut self, asset: Option<Arc<Asset>>) {
        if let Some(asset) = &asset {
            debug!(asset = %asset.id, name = %asset.name, "Filmstrip asset changed");
        }
        self.asset = asset;
        self.tiles.clear();
        self.scroll_offset = 0.0;
    }

    fn set_visible_width(&mut self, width: f32) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if width != self.visible_width {
            self.visible_width = width;
            self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        }
    }

    fn visible_width(&self) -> f32 {
        self.visible_width
    }

    fn content_width(&self) -> f32 {
        let Some(duration) = self.duration_seconds() else {
            return 0.0;
        };
        let scale = match self.max_visible_duration {
            Some(max) => (duration / max).max(1.0),
            None => 1.0,
        };
        self.visible_width * scale as f32
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn scroll_by(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let next = (self.scroll_offset + delta).clamp(0.0, self.max_scroll());
        let changed = next != self.scroll_offset;
        self.scroll_offset = next;
        changed
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0.0;
    }

    fn time_at(&self, pixel: f32) -> Option<RationalTime> {
        let duration = self.duration_seconds()?;
        let width = self.content_width();
        if width <= 0.0 || !pixel.is_finite() {
            return None;
        }
        let ratio = (pixel as f64 / width as f64).clamp(0.0, 1.0);
        Some(RationalTime::from_seconds_f64(ratio * duration))
    }

    fn position_of(&self, time: RationalTime) -> Option<f32> {
        let duration = self.duration_seconds()?;
        let width = self.content_width();
        if width <= 0.0 {
            return None;
        }
        Some((time.to_seconds_f64() / duration * width as f64) as f32)
    }

    fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect) {
        let Some(asset) = self.asset.clone() else {
            painter.rect_filled(rect, Rounding::ZERO, self.placeholder);
            return;
        };
        let content_width = self.content_width();
        if content_width <= 0.0 || rect.height() <= 0.0 {
            return;
        }

        let tile_width = (rect.height() * TILE_ASPECT).max(1.0);
        if tile_width != self.tile_width {
            // Tiles were rendered for a different strip height.
            self.tiles.clear();
            self.tile_width = tile_width;
        }
        let tile_count = (content_width / tile_width).ceil() as usize;
        let first = (self.scroll_offset / tile_width).floor() as usize;
        let last = (((self.scroll_offset + rect.width()) / tile_width).ceil() as usize).min(tile_count);

        for index in first..last {
            let x = rect.left() + index as f32 * tile_width - self.scroll_offset;
            let tile = Rect::from_min_size(Pos2::new(x, rect.top()), Vec2::new(tile_width, rect.height()));

            if !self.tiles.contains_key(&index) {
                let at = self
                    .time_at(index as f32 * tile_width + tile_width / 2.0)
                    .unwrap_or(RationalTime::ZERO);
                let size = [tile_width.round() as usize, rect.height().round() as usize];
                if let Some(image) = self
                    .provider
                    .as_mut()
                    .and_then(|p| p.render(&asset, at, size))
                {
                    let name = format!("trimkit-thumb-{}-{}", asset.id, index);
                    let texture = ctx.load_texture(name, image, TextureOptions::LINEAR);
                    self.tiles.insert(index, texture);
                }
            }

            match self.tiles.get(&index) {
                Some(texture) => {
                    painter.image(
                        texture.id(),
                        tile,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                None => {
                    painter.rect_filled(tile.shrink(0.5), Rounding::ZERO, self.placeholder);
                }
            }
        }
    }
}
