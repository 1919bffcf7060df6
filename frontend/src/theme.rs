use log::debug;
use web_sys::window;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_preference(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Glyph for the toggle button: it shows the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }
}

/// Reads the host's color-scheme preference. Called once at startup.
pub fn detect() -> ThemeMode {
    let prefers_dark = window()
        .and_then(|w| w.match_media(DARK_QUERY).ok())
        .flatten()
        .map(|query| query.matches());
    ThemeMode::from_dark_preference(prefers_dark)
}

/// Sets or clears the `dark` class on `<html>`; the stylesheet keys its
/// palette off that class.
pub fn apply(mode: ThemeMode) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, mode.is_dark());
        debug!("Applied {:?} theme", mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn preference_falls_back_to_light() {
        assert_eq!(ThemeMode::from_dark_preference(Some(true)), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark_preference(Some(false)), ThemeMode::Light);
        assert_eq!(ThemeMode::from_dark_preference(None), ThemeMode::Light);
    }

    #[test]
    fn icon_previews_the_other_mode() {
        assert_eq!(ThemeMode::Light.toggle_icon(), "☾");
        assert_eq!(ThemeMode::Dark.toggle_icon(), "☀");
    }
}
