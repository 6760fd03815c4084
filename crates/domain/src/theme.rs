//! Theme — the stored preference, the effective theme, and toggle visuals.

use serde::{Deserialize, Serialize};

/// Key under which the preference is persisted in the client-local store.
pub const STORAGE_KEY: &str = "theme";

/// Theme actually rendered. Never "auto".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The theme a toggle click switches to.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase value used for the root attribute and the store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Capitalized name used as the toggle text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Glyph shown on the toggle when this theme is the next one.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f}",
            Self::Dark => "\u{1f319}",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's explicit choice. [`Unset`](Self::Unset) defers to the OS signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Interpret a raw stored value.
    ///
    /// Anything other than exactly `"light"` or `"dark"` (missing, empty,
    /// different case, garbage) is treated as [`Unset`](Self::Unset).
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::Unset,
        }
    }

    /// The explicit theme, if any.
    #[must_use]
    pub fn explicit(self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Unset => None,
        }
    }

    /// Value for the root `data-theme` attribute; `None` means remove it.
    #[must_use]
    pub fn attribute_value(self) -> Option<&'static str> {
        self.explicit().map(Theme::as_str)
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attribute_value().unwrap_or("auto"))
    }
}

/// Compute the theme to render.
///
/// An explicit preference always wins; otherwise the OS dark-mode signal
/// decides.
#[must_use]
pub fn resolve_effective_theme(preference: ThemePreference, os_prefers_dark: bool) -> Theme {
    match preference.explicit() {
        Some(theme) => theme,
        None if os_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// What the theme toggle control shows for a given current theme.
///
/// The control advertises the *next* theme, not the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleVisuals {
    pub icon: &'static str,
    pub text: &'static str,
    pub aria_label: String,
    pub aria_pressed: bool,
}

impl ToggleVisuals {
    #[must_use]
    pub fn for_current(current: Theme) -> Self {
        let next = current.opposite();
        Self {
            icon: next.icon(),
            text: next.label(),
            aria_label: format!("Switch to {next} mode"),
            aria_pressed: current == Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALFORMED: [Option<&str>; 6] = [
        None,
        Some(""),
        Some("auto"),
        Some("DARK"),
        Some(" light"),
        Some("solarized"),
    ];

    #[test]
    fn should_follow_os_signal_when_preference_is_malformed() {
        for raw in MALFORMED {
            let pref = ThemePreference::from_stored(raw);
            assert_eq!(pref, ThemePreference::Unset, "{raw:?}");
            assert_eq!(resolve_effective_theme(pref, true), Theme::Dark);
            assert_eq!(resolve_effective_theme(pref, false), Theme::Light);
        }
    }

    #[test]
    fn should_ignore_os_signal_when_preference_is_explicit() {
        for theme in [Theme::Light, Theme::Dark] {
            let pref = ThemePreference::from_stored(Some(theme.as_str()));
            for os in [true, false] {
                assert_eq!(resolve_effective_theme(pref, os), theme);
            }
        }
    }

    #[test]
    fn should_clear_attribute_when_preference_is_unset() {
        assert_eq!(ThemePreference::Unset.attribute_value(), None);
        assert_eq!(ThemePreference::Dark.attribute_value(), Some("dark"));
    }

    #[test]
    fn should_advertise_light_when_current_is_dark() {
        let visuals = ToggleVisuals::for_current(Theme::Dark);
        assert_eq!(visuals.text, "Light");
        assert_eq!(visuals.icon, Theme::Light.icon());
        assert_eq!(visuals.aria_label, "Switch to light mode");
        assert!(visuals.aria_pressed);
    }

    #[test]
    fn should_advertise_dark_when_current_is_light() {
        let visuals = ToggleVisuals::for_current(Theme::Light);
        assert_eq!(visuals.text, "Dark");
        assert_eq!(visuals.icon, "\u{1f319}");
        assert_eq!(visuals.aria_label, "Switch to dark mode");
        assert!(!visuals.aria_pressed);
    }

    #[test]
    fn should_display_unset_preference_as_auto() {
        assert_eq!(ThemePreference::Unset.to_string(), "auto");
        assert_eq!(ThemePreference::Light.to_string(), "light");
    }

    #[test]
    fn should_serialize_theme_lowercase() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
