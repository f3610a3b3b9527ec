//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The icon catalog itself is generated at build time (see `build.rs`).

use icons_core::{CategoryCombine, CategoryScheme};

// =============================================================================
// Application Metadata
// =============================================================================

/// Page title shown in the header.
pub const APP_TITLE: &str = "AWS Architecture Icons";

/// Logo image, relative to the site root.
pub const LOGO_URL: &str = "./awslogo.png";

/// Where the logo links to.
pub const HOME_URL: &str = "https://iamabrom.github.io/aws-icons/";

/// Upstream icon source.
pub const ICON_SOURCE_URL: &str = "https://aws.amazon.com/architecture/icons/";

/// Source repository.
pub const REPO_URL: &str = "https://github.com/iamabrom/aws-icons";

// =============================================================================
// Catalog Configuration
// =============================================================================

/// How folders map onto category selectors.
///
/// - `CategoryScheme::split()` - services (`a_`) and resources (`b_`) dropdowns
/// - `CategoryScheme::Single` - one dropdown, every folder is a category
pub const CATEGORY_SCHEME: CategoryScheme = CategoryScheme::split();

/// Only catalog paths under this prefix are indexed.
///
/// Use `"services/"` together with `CategoryScheme::Single` for the
/// services-only gallery.
pub const CATALOG_PREFIX: &str = "";

/// How two concrete category selections combine.
pub const CATEGORY_COMBINE: CategoryCombine = CategoryCombine::Intersect;

// =============================================================================
// Interaction Configuration
// =============================================================================

/// How long the "Copied!" label stays on a card (milliseconds).
pub const COPY_FEEDBACK_MS: u32 = 1000;

/// Message shown when an image could not be copied.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy image.";

/// Vertical scroll offset (px) past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Media query for the compact (stacked) header layout.
pub const COMPACT_LAYOUT_QUERY: &str = "(max-width: 600px)";

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

/// Font stack applied to the whole page.
pub const FONT_FAMILY: &str =
    "Inter, ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial";
