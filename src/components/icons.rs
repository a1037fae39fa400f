//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuInfo as Info, LuTrash2 as Trash, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsCloudArrowUp as Upload, BsFileEarmarkPdf as FilePdf, BsInfoCircle as Info,
        BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(UPLOAD, Upload);
themed_icon!(TRASH, Trash);
themed_icon!(INFO, Info);
themed_icon!(CLOSE, Close);
