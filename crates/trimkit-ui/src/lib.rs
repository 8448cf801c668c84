//! Trimkit UI - egui video trimming widget
//!
//! Provides:
//! - `Trimmer`, a filmstrip with draggable start/end handles and a position bar
//! - Filmstrip preview with lazily rendered thumbnails
//! - Handle drag clamping and scroll synchronization
//! - Listener notifications for the host's player

pub mod handle;
pub mod layout;
pub mod listener;
pub mod preview;
pub mod scroll;
pub mod theme;
pub mod trimmer;
mod widget;

pub use handle::HandleEdge;
pub use layout::TrimmerLayout;
pub use listener::{dispatch_all, TrimmerEvent, TrimmerListener};
pub use preview::{AssetPreview, FilmstripPreview, ThumbnailProvider};
pub use scroll::{DeferredTask, Momentum, ScrollPhase};
pub use theme::TrimmerColors;
pub use trimmer::{Trimmer, TrimmerEvents};
