//! Data models and types for the application.
//!
//! Catalog types ([`icons_core::IconAsset`], [`icons_core::FilterState`]) come
//! from the core crate; this module holds the view-only ones:
//! - [`Theme`] - Light/dark palettes

mod theme;

pub use theme::Theme;
