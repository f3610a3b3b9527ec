//! Icon asset records and the pure derivations made from an asset path.

use serde::{Deserialize, Serialize};

/// One image file in the catalog.
///
/// All fields are fixed at load time. `display_name` is always derived from
/// `filename` through [`display_name_for`] and never edited on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAsset {
    /// Base file name including extension (unique within its folder)
    pub filename: String,
    /// Human-readable label (extension removed, dashes as spaces)
    pub display_name: String,
    /// Resolvable image location
    pub url: String,
    /// Immediate parent directory, used as the category key
    pub folder: String,
}

impl IconAsset {
    /// Build an asset from its folder, filename and url.
    pub fn new(folder: impl Into<String>, filename: impl Into<String>, url: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            display_name: display_name_for(&filename),
            filename,
            url: url.into(),
            folder: folder.into(),
        }
    }

    /// Build an asset from a catalog path such as `assets/icons/a_compute/lambda.png`.
    ///
    /// Returns `None` when the path has no parent segment to use as a folder.
    pub fn from_path(path: &str, url: impl Into<String>) -> Option<Self> {
        let (folder, filename) = split_asset_path(path)?;
        Some(Self::new(folder, filename, url))
    }

    /// Case-insensitive substring match on filename or display name.
    ///
    /// `needle_lower` must already be lowercased.
    pub(crate) fn matches_text(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.filename.to_lowercase().contains(needle_lower)
            || self.display_name.to_lowercase().contains(needle_lower)
    }
}

/// Split a path into `(folder, filename)` using its last two segments.
///
/// Both `/` and `\` are accepted as separators so Windows build hosts produce
/// the same catalog.
pub fn split_asset_path(path: &str) -> Option<(&str, &str)> {
    let mut segments = path
        .rsplit(['/', '\\'])
        .filter(|segment| !segment.is_empty());
    let filename = segments.next()?;
    let folder = segments.next()?;
    Some((folder, filename))
}

/// Derive the display name for a file: strip the extension, dashes become spaces.
///
/// Only the final extension is removed (`a.b.png` → `a.b`). A leading dot is
/// not treated as an extension separator.
pub fn display_name_for(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(pos) if pos > 0 => &filename[..pos],
        _ => filename,
    };
    stem.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_strips_extension() {
        assert_eq!(display_name_for("lambda.png"), "lambda");
        assert_eq!(display_name_for("EC2.svg"), "EC2");
    }

    #[test]
    fn test_display_name_replaces_every_dash() {
        assert_eq!(
            display_name_for("Arch_Amazon-EC2-Auto-Scaling_48.png"),
            "Arch_Amazon EC2 Auto Scaling_48"
        );
        assert_eq!(display_name_for("a--b.png"), "a  b");
    }

    #[test]
    fn test_display_name_without_extension() {
        assert_eq!(display_name_for("README"), "README");
        assert_eq!(display_name_for(".hidden"), ".hidden");
    }

    #[test]
    fn test_split_asset_path() {
        assert_eq!(
            split_asset_path("assets/icons/a_compute/lambda.png"),
            Some(("a_compute", "lambda.png"))
        );
        assert_eq!(
            split_asset_path("icons\\b_storage\\s3.png"),
            Some(("b_storage", "s3.png"))
        );
        assert_eq!(split_asset_path("lambda.png"), None);
        assert_eq!(split_asset_path(""), None);
    }

    #[test]
    fn test_from_path() {
        let asset = IconAsset::from_path("./assets/icons/a_compute/ec2-instance.png", "/x.png")
            .expect("path has a folder");
        assert_eq!(asset.folder, "a_compute");
        assert_eq!(asset.filename, "ec2-instance.png");
        assert_eq!(asset.display_name, "ec2 instance");
        assert_eq!(asset.url, "/x.png");
    }

    #[test]
    fn test_matches_text() {
        let asset = IconAsset::new("a_compute", "EC2-Instance.png", "u");
        assert!(asset.matches_text(""));
        assert!(asset.matches_text("ec2-inst"));
        assert!(asset.matches_text("ec2 inst"));
        assert!(asset.matches_text(".png"));
        assert!(!asset.matches_text("lambda"));
    }
}
