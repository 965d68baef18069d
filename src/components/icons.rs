//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::FileIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBraces as FileJson, LuCheck as Check, LuChevronDown as ChevronDown,
        LuFileCode as FilePython, LuFolderOpen as Explorer, LuHash as FileHash,
        LuTerminal as Terminal, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckLg as Check, BsChevronDown as ChevronDown, BsFiletypeJson as FileJson,
        BsFiletypePy as FilePython, BsFolder2Open as Explorer, BsHash as FileHash,
        BsTerminal as Terminal, BsXLg as Close,
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

themed_icon!(CHECK, Check);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CLOSE, Close);
themed_icon!(EXPLORER, Explorer);
themed_icon!(FILE_HASH, FileHash);
themed_icon!(FILE_JSON, FileJson);
themed_icon!(FILE_PYTHON, FilePython);
themed_icon!(TERMINAL, Terminal);

/// Icon for a file kind.
pub fn file_icon(kind: FileIcon) -> Icon {
    match kind {
        FileIcon::Python => FILE_PYTHON,
        FileIcon::Json => FILE_JSON,
        FileIcon::Hash => FILE_HASH,
    }
}
