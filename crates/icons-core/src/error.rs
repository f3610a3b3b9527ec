//! Error types for the gallery core.
//!
//! - [`CopyError`] - Fetching an image or writing it to the clipboard
//! - [`LoadError`] - Walking the icon tree on disk

use std::path::PathBuf;

use thiserror::Error;

/// Failure anywhere in the copy-to-clipboard flow.
///
/// The gallery reports every variant to the user the same way; the variants
/// exist so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    /// Browser window or clipboard API not available
    #[error("clipboard not available: {0}")]
    Unsupported(String),
    /// Request for the image bytes failed
    #[error("failed to fetch image: {0}")]
    Fetch(String),
    /// Non-2xx response for the image
    #[error("failed to fetch image: HTTP {0}")]
    HttpStatus(u16),
    /// Clipboard rejected the write (permissions, unsupported type)
    #[error("clipboard write rejected: {0}")]
    Clipboard(String),
}

/// Failure while discovering assets on disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Asset root does not exist or is not a directory
    #[error("asset root not found: {}", .0.display())]
    MissingRoot(PathBuf),
    /// I/O error reading a directory
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
