//! Browser-side helpers.
//!
//! Provides:
//! - [`dom`] - window access, measurement, and `FileList` conversion
//! - [`format_size`] - human-readable byte counts
//! - [`pdfjs`] - PDF.js bridge (document load and page rendering)
//! - [`on_resize_throttled`] - window resize coalesced by [`pdfdeck_core::Throttle`]

pub mod dom;
mod format;
pub mod pdfjs;
mod resize;

pub use format::format_size;
pub use resize::on_resize_throttled;
