//! UI components built with Leptos.
//!
//! - [`Workspace`] - Main layout (intake, file list, preview)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`preview`] - PDF preview pane and page controls

pub mod icons;
pub mod preview;
pub mod workspace;

pub use workspace::Workspace;
