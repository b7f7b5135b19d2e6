//! Light and dark palettes for the guide reader.

use iced::Theme as IcedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<crate::config::ThemeMode> for Theme {
    fn from(mode: crate::config::ThemeMode) -> Self {
        match mode {
            crate::config::ThemeMode::Night => Theme::Dark,
            crate::config::ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::TokyoNight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;

    #[test]
    fn night_mode_maps_to_dark_palette() {
        assert_eq!(Theme::from(ThemeMode::Night), Theme::Dark);
        assert_eq!(IcedTheme::from(Theme::from(ThemeMode::Day)), IcedTheme::Light);
    }
}
