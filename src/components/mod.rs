//! UI components built with Leptos.
//!
//! - [`Gallery`] - Page layout (header, icon grid, scroll-to-top)
//! - [`header`] - Title bar, search field, category selectors, theme toggle
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`scroll_top`] - Floating scroll-to-top button

pub mod gallery;
pub mod header;
pub mod icons;
pub mod scroll_top;

pub use gallery::Gallery;
