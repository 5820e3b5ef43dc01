/// Visual theme flag mirrored on the page root as `data-theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light palette (default).
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

/// Attributes mirrored on the theme toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAttributes {
    /// `aria-pressed` value.
    pub aria_pressed: &'static str,
    /// `aria-label` value describing the next action.
    pub aria_label: &'static str,
    /// Glyph shown on the control.
    pub glyph: &'static str,
}

impl ThemeMode {
    /// Stored / attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// What: Parse a stored flag value.
    ///
    /// Inputs:
    /// - `value`: Raw stored text.
    ///
    /// Output:
    /// - `Some(mode)` for exactly `light` or `dark` (surrounding whitespace ignored).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle control attributes for this mode.
    #[must_use]
    pub const fn toggle_attributes(self) -> ToggleAttributes {
        match self {
            Self::Dark => ToggleAttributes {
                aria_pressed: "true",
                aria_label: "Switch to light mode",
                glyph: "\u{2600}",
            },
            Self::Light => ToggleAttributes {
                aria_pressed: "false",
                aria_label: "Switch to dark mode",
                glyph: "\u{263e}",
            },
        }
    }
}
