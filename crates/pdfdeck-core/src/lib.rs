//! Core state for the pdfdeck viewer.
//!
//! Everything here is framework independent and runs natively:
//! - [`FileSet`] - validated, deduplicated collection of uploaded files
//! - [`Navigator`] - selection, pagination, and render width for the preview
//! - [`Viewer`] - session tying both together with the validation error slot
//! - [`Throttle`] - trailing-edge coalescer for bursty events (window resize)

pub mod config;
pub mod error;
mod file_set;
pub mod log;
pub mod models;
mod navigator;
mod throttle;
mod viewer;

pub use error::{IntakeError, ViewerError};
pub use file_set::FileSet;
pub use models::{FileKey, FileRecord, LoadOutcome, LoadTicket, Pagination, is_pdf};
pub use navigator::Navigator;
pub use throttle::Throttle;
pub use viewer::Viewer;
