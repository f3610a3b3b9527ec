//! Color theme for the gallery.

/// Light or dark page theme. Dark is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Tooltip for the toggle button.
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: "#121212",
                paper: "#1e1e1e",
                text: "#ffffff",
                text_muted: "rgba(255, 255, 255, 0.7)",
                divider: "rgba(255, 255, 255, 0.12)",
                primary: "#f59e0b",
                primary_dark: "#b45309",
                shadow: "rgba(0, 0, 0, 0.6)",
            },
            Self::Light => Palette {
                background: "#f9f9f9",
                paper: "#ffffff",
                text: "rgba(0, 0, 0, 0.87)",
                text_muted: "rgba(0, 0, 0, 0.6)",
                divider: "rgba(0, 0, 0, 0.12)",
                primary: "#000000",
                primary_dark: "#333333",
                shadow: "rgba(0, 0, 0, 0.2)",
            },
        }
    }
}

/// Colors for one theme, exposed to CSS as custom properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub paper: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub divider: &'static str,
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub shadow: &'static str,
}

impl Palette {
    /// Inline `style` value declaring the palette as CSS variables.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --paper: {}; --text: {}; --text-muted: {}; --divider: {}; \
             --primary: {}; --primary-dark: {}; --shadow: {};",
            self.background,
            self.paper,
            self.text,
            self.text_muted,
            self.divider,
            self.primary,
            self.primary_dark,
            self.shadow,
        )
    }
}
