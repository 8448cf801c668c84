//! Media asset handles.

use crate::time::RationalTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(Uuid);

impl AssetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A media item with a known total duration.
///
/// The host owns assets; the trimmer only keeps a shared handle to the one it
/// is displaying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub duration: RationalTime,
}

impl Asset {
    pub fn new(name: impl Into<String>, duration: RationalTime) -> Self {
        Self {
            id: AssetId::new(),
            name: name.into(),
            duration,
        }
    }

    #[inline]
    pub fn duration_seconds(&self) -> f64 {
        self.duration.to_seconds_f64()
    }

    /// True when the asset has no playable length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.duration.is_zero() || self.duration.is_negative()
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
