//! Data types for the viewer core.
//!
//! - [`FileKey`], [`FileRecord`] - uploaded files and their identity
//! - [`Pagination`], [`LoadTicket`], [`LoadOutcome`] - preview state

mod file;
mod preview;

pub use file::{FileKey, FileRecord, is_pdf};
pub use preview::{LoadOutcome, LoadTicket, Pagination};
