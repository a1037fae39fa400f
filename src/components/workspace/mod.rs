//! Workspace UI components.
//!
//! Components:
//! - [`Workspace`] - Main layout
//! - [`DropZone`] - File picker and drag-and-drop target
//! - [`ErrorBanner`] - Validation error from the last intake
//! - [`FileList`] - Uploaded files with select and remove actions

mod file_list;
mod intake;
#[allow(clippy::module_inception)]
mod workspace;

pub use file_list::FileList;
pub use intake::{DropZone, ErrorBanner};
pub use workspace::Workspace;
