//! Asset discovery on disk.
//!
//! Walks an icon tree laid out as `<root>/<category-folder>/<name>.<ext>` and
//! produces the `(path, url)` pairs that [`crate::IconIndex::build`] consumes.
//! Used by the web build script to embed the catalog and by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Options controlling discovery.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// File extensions to include, compared case-insensitively, without the dot
    pub extensions: Vec<String>,
    /// Prefix joined in front of the encoded relative path to form the url
    pub url_prefix: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["png".to_string()],
            url_prefix: String::new(),
        }
    }
}

impl LoadOptions {
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Each path segment is percent-encoded; the prefix is used as given.
    fn url_for(&self, relative: &str) -> String {
        let encoded = relative
            .split('/')
            .map(urlencoding::encode)
            .collect::<Vec<_>>()
            .join("/");

        let prefix = self.url_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            encoded
        } else {
            format!("{}/{}", prefix, encoded)
        }
    }
}

/// One discovered file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredAsset {
    /// Path relative to the root, `/`-separated
    pub path: String,
    /// Resolvable url
    pub url: String,
}

/// Walk `root` and return every matching file, sorted by relative path.
///
/// Hidden entries (names starting with `.`) are skipped.
pub fn discover(root: &Path, options: &LoadOptions) -> Result<Vec<DiscoveredAsset>, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::MissingRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();
    walk(root, &mut files)?;

    let mut assets: Vec<DiscoveredAsset> = files
        .into_iter()
        .filter(|path| options.accepts(path))
        .filter_map(|path| {
            let relative = relative_path(root, &path)?;
            Some(DiscoveredAsset {
                url: options.url_for(&relative),
                path: relative,
            })
        })
        .collect();

    assets.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(assets)
}

/// Like [`discover`], but a missing root yields an empty catalog.
pub fn discover_or_empty(root: &Path, options: &LoadOptions) -> Result<Vec<DiscoveredAsset>, LoadError> {
    match discover(root, options) {
        Err(LoadError::MissingRoot(_)) => Ok(Vec::new()),
        other => other,
    }
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if path.is_dir() {
            walk(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}
