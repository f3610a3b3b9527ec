//! Category keys, selection axes, and the folder naming scheme that maps
//! folders onto axes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label and serialized value of the synthetic "no filter" category.
pub const ALL_LABEL: &str = "All";

/// A selectable category on one axis.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// No filtering on this axis
    #[default]
    All,
    /// A concrete folder key
    Folder(String),
}

impl Category {
    /// Parse a selection value. `"All"` maps to [`Category::All`].
    pub fn parse(value: &str) -> Self {
        Self::from(value.to_string())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The stored key: the folder name, or `"All"`.
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Folder(folder) => folder,
        }
    }

    /// Display label.
    ///
    /// Strips one leading `a_` or `b_` marker, then replaces dashes with spaces.
    /// The key itself is left untouched.
    pub fn label(&self) -> String {
        match self {
            Self::All => ALL_LABEL.to_string(),
            Self::Folder(folder) => format_category_label(folder),
        }
    }

    /// Folder key when this category constrains the axis.
    pub fn folder(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Folder(folder) => Some(folder),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        if value == ALL_LABEL {
            Self::All
        } else {
            Self::Folder(value)
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::All => ALL_LABEL.to_string(),
            Category::Folder(folder) => folder,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Category selection dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryAxis {
    /// Axis 1: service categories (every folder in the single-axis scheme)
    Service,
    /// Axis 2: resource categories (two-axis scheme only)
    Resource,
}

impl CategoryAxis {
    /// Title shown on the axis selector.
    pub fn title(self) -> &'static str {
        match self {
            Self::Service => "Services",
            Self::Resource => "Resources",
        }
    }
}

/// How folders are assigned to category axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryScheme {
    /// One axis; every folder is a category.
    #[default]
    Single,
    /// Two axes split by folder name prefix. Folders matching neither marker
    /// are not categories, though their icons are still listed.
    Split {
        service_marker: &'static str,
        resource_marker: &'static str,
    },
}

impl CategoryScheme {
    /// The two-axis scheme with the `a_` / `b_` markers.
    pub const fn split() -> Self {
        Self::Split {
            service_marker: "a_",
            resource_marker: "b_",
        }
    }

    /// Axes exposed by this scheme, in selector order.
    pub fn axes(&self) -> &'static [CategoryAxis] {
        match self {
            Self::Single => &[CategoryAxis::Service],
            Self::Split { .. } => &[CategoryAxis::Service, CategoryAxis::Resource],
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }

    /// Axis a folder belongs to, if any.
    pub fn classify(&self, folder: &str) -> Option<CategoryAxis> {
        match self {
            Self::Single => Some(CategoryAxis::Service),
            Self::Split {
                service_marker,
                resource_marker,
            } => {
                if folder.starts_with(service_marker) {
                    Some(CategoryAxis::Service)
                } else if folder.starts_with(resource_marker) {
                    Some(CategoryAxis::Resource)
                } else {
                    None
                }
            }
        }
    }
}

fn format_category_label(folder: &str) -> String {
    let stripped = match folder.as_bytes() {
        [b'a' | b'b', b'_', ..] => &folder[2..],
        _ => folder,
    };
    stripped.replace('-', " ")
}
