//! Trimkit Core - Foundation types for the video trimmer
//!
//! This crate provides the types shared by the widget and its hosts:
//! - Time representation (RationalTime, TimeRange)
//! - Media asset handles
//! - Timestamp label formatting
//! - Trimmer configuration

pub mod asset;
pub mod config;
pub mod error;
pub mod time;
pub mod timestamp;

pub use asset::{Asset, AssetId};
pub use config::{Palette, TrimmerConfig};
pub use error::{Result, TrimkitError};
pub use time::{FrameRate, RationalTime, TimeRange};
pub use timestamp::{format_timestamp, Hms};
