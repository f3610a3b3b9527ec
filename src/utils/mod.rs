//! Browser integration for the gallery.
//!
//! Provides:
//! - [`dom`] - Window access, alerts, scrolling, downloads
//! - [`BrowserClipboard`] - Clipboard sink for copied images
//! - [`HttpImageFetcher`] - Image byte fetching

mod clipboard;
pub mod dom;
mod fetch;

pub use clipboard::BrowserClipboard;
pub use fetch::HttpImageFetcher;
