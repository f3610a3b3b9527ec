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
        LuArrowUp as ArrowUp, LuCheck as Check, LuCopy as Copy, LuDownload as Download,
        LuMoon as Moon, LuSearch as Search, LuSun as Sun, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as ArrowUp, BsCheckLg as Check, BsClipboard as Copy, BsDownload as Download,
        BsMoonStarsFill as Moon, BsSearch as Search, BsSunFill as Sun, BsXLg as Close,
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

themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);
themed_icon!(DOWNLOAD, Download);
themed_icon!(ARROW_UP, ArrowUp);
