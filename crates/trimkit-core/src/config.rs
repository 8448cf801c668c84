//! Trimmer configuration.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes.

use crate::error::{Result, TrimkitError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Colors of the trimmer chrome as RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Handle bodies.
    pub main: [u8; 3],
    /// Knobs drawn inside the handles.
    pub handle: [u8; 3],
    /// Position indicator.
    pub position_bar: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            main: [255, 165, 0],
            handle: [128, 128, 128],
            position_bar: [255, 255, 255],
        }
    }
}

/// Configuration for a trimmer widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimmerConfig {
    /// Width of each handle in points (default: 15).
    pub handle_width: f32,
    /// Shortest selectable range in seconds (default: 1).
    pub min_duration: f64,
    /// Longest span shown without scrolling, in seconds (default: 15).
    /// `None` fits the whole asset into the visible filmstrip.
    pub max_visible_duration: Option<f64>,
    /// Delay before the indicator snaps back after a scroll, in seconds (default: 0.2).
    pub settle_delay: f64,
    /// Width of the position indicator in points (default: 3).
    pub position_bar_width: f32,
    /// Height of the filmstrip and handles in points (default: 50).
    pub height: f32,
    /// Font size of the handle timestamp labels (default: 14).
    pub label_font_size: f32,
    /// Opacity of the masks over the unselected parts (default: 0.7).
    pub mask_alpha: f32,
    pub palette: Palette,
}

impl Default for TrimmerConfig {
    fn default() -> Self {
        Self {
            handle_width: 15.0,
            min_duration: 1.0,
            max_visible_duration: Some(15.0),
            settle_delay: 0.2,
            position_bar_width: 3.0,
            height: 50.0,
            label_font_size: 14.0,
            mask_alpha: 0.7,
            palette: Palette::default(),
        }
    }
}

impl TrimmerConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| TrimkitError::Config(format!("Invalid trimmer config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TrimkitError::NotFound(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| TrimkitError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Reject values the widget geometry cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.handle_width.is_finite() && self.handle_width > 0.0) {
            return Err(invalid("handle_width", self.handle_width as f64));
        }
        if !(self.min_duration.is_finite() && self.min_duration >= 0.0) {
            return Err(invalid("min_duration", self.min_duration));
        }
        if let Some(max) = self.max_visible_duration {
            if !(max.is_finite() && max > 0.0) {
                return Err(invalid("max_visible_duration", max));
            }
        }
        if !(self.settle_delay.is_finite() && self.settle_delay >= 0.0) {
            return Err(invalid("settle_delay", self.settle_delay));
        }
        if !(self.position_bar_width.is_finite() && self.position_bar_width >= 0.0) {
            return Err(invalid("position_bar_width", self.position_bar_width as f64));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid("height", self.height as f64));
        }
        if !(self.label_font_size.is_finite() && self.label_font_size > 0.0) {
            return Err(invalid("label_font_size", self.label_font_size as f64));
        }
        if !(0.0..=1.0).contains(&self.mask_alpha) {
            return Err(invalid("mask_alpha", self.mask_alpha as f64));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: f64) -> TrimkitError {
    TrimkitError::InvalidParameter(format!("{} cannot be {}", field, value))
}
