//! Indexing and filtering core for the icon gallery.
//!
//! This crate has no browser dependencies so it can be shared by the web
//! front-end, the build script that embeds the asset catalog, and the CLI.
//!
//! - [`loader`] - Walks an icon tree and produces `(path, url)` pairs
//! - [`IconIndex`] - Immutable, sorted, categorized index built once at startup
//! - [`FilterState`] / [`filter_icons`] - Search and category filtering
//! - [`CopyFeedback`] / [`copy_image`] - Clipboard copy flow and its indicator
//! - [`FontTier`] - Card title sizing by display-name length
//! - [`collate`] - Case-insensitive reading order used by the index

mod asset;
mod category;
mod collate;
mod copy;
pub mod error;
mod filter;
mod index;
pub mod loader;
mod typography;

pub use asset::{display_name_for, split_asset_path, IconAsset};
pub use category::{Category, CategoryAxis, CategoryScheme};
pub use collate::collate;
pub use copy::{copy_image, ClipboardSink, CopyFeedback, CopyToken, FetchedImage, ImageFetcher};
pub use error::{CopyError, LoadError};
pub use filter::{filter_icons, CategoryCombine, FilterState};
pub use index::IconIndex;
pub use typography::FontTier;
