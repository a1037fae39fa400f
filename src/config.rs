//! Application configuration.
//!
//! Centralizes the constants used by the front end. Intake and pagination
//! constants live in [`pdfdeck_core::config`] and are re-exported here.

pub use pdfdeck_core::config::RESIZE_THROTTLE_MS;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "pdfdeck";

/// Element the app mounts into (see `index.html`).
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Intake
// =============================================================================

/// `accept` attribute for the file picker.
pub const PICKER_ACCEPT: &str = "application/pdf,.pdf";

// =============================================================================
// Renderer
// =============================================================================

/// PDF.js worker script. Must match the library version loaded in `index.html`.
pub const PDFJS_WORKER_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.worker.min.js";

/// Render width used until the preview container has been measured.
pub const FALLBACK_RENDER_WIDTH: f64 = 576.0;

// =============================================================================
// Layout
// =============================================================================

/// Media query below which the file list collapses above the preview.
pub const COMPACT_LAYOUT_QUERY: &str = "(max-width: 768px)";

// =============================================================================
// Keyboard
// =============================================================================

/// Preview pane key bindings.
pub mod keys {
    pub const PREVIOUS_PAGE: &[&str] = &["ArrowLeft", "PageUp"];
    pub const NEXT_PAGE: &[&str] = &["ArrowRight", "PageDown"];
    pub const CLOSE_PREVIEW: &[&str] = &["Escape"];
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
