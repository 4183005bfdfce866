//! Light/dark theme values and startup resolution.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Presentation mode of the page. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored preference. Anything but `dark` means light.
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon shown on the theme switches while this theme is active: the
    /// switch advertises the state it would switch to.
    pub fn switch_icon(self) -> SwitchIcon {
        match self.opposite() {
            Self::Light => SwitchIcon::Sun,
            Self::Dark => SwitchIcon::Moon,
        }
    }
}

/// Glyph rendered inside a theme switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchIcon {
    Sun,
    Moon,
}

impl SwitchIcon {
    pub fn markup(self) -> &'static str {
        match self {
            Self::Sun => r#"<i class="fas fa-sun fa-lg"></i>"#,
            Self::Moon => r#"<i class="fas fa-moon fa-lg"></i>"#,
        }
    }
}

/// The two theme switch affordances on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeSwitch {
    Desktop,
    Mobile,
}

impl ThemeSwitch {
    pub const ALL: [Self; 2] = [Self::Desktop, Self::Mobile];
}

/// Pick the startup theme: a stored value wins, then the system dark-mode
/// preference, then light.
pub fn resolve_startup(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(raw) if !raw.is_empty() => Theme::from_stored(raw),
        _ if system_prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}
