//! Preview components for the selected PDF.
//!
//! The load/measure/render wiring lives in [`use_preview`]; the pane and
//! its controls only read the signals it returns.

mod controls;
mod hook;
mod panel;

pub use controls::PageControls;
pub use hook::use_preview;
pub use panel::PreviewPanel;
