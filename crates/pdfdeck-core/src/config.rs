//! Constants shared by the core and the browser front end.

// =============================================================================
// File Intake
// =============================================================================

/// MIME type accepted without looking at the file name.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File extension accepted (compared case-insensitively) when the MIME type
/// is missing or generic.
pub const PDF_EXTENSION: &str = "pdf";

// =============================================================================
// Preview
// =============================================================================

/// First page of every document. Pages are 1-based.
pub const FIRST_PAGE: u32 = 1;

/// Window for coalescing viewport resize events, in milliseconds.
pub const RESIZE_THROTTLE_MS: u32 = 250;
