//! Card title sizing.

/// Font size tier for a card title, chosen from the display name length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontTier {
    /// More than 36 characters
    Small,
    /// 31 to 36 characters
    Medium,
    /// 30 characters or fewer
    Large,
}

impl FontTier {
    const MEDIUM_ABOVE: usize = 30;
    const SMALL_ABOVE: usize = 36;

    /// Pick the tier for a display name. Length is counted in characters.
    pub fn for_name(display_name: &str) -> Self {
        match display_name.chars().count() {
            n if n > Self::SMALL_ABOVE => Self::Small,
            n if n > Self::MEDIUM_ABOVE => Self::Medium,
            _ => Self::Large,
        }
    }

    /// CSS font-size value.
    pub fn css_size(self) -> &'static str {
        match self {
            Self::Small => "0.75rem",
            Self::Medium => "0.85rem",
            Self::Large => "0.95rem",
        }
    }
}
