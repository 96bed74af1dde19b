// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Theme preference stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the OS setting.
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection failures fall back to dark.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced theme to render with.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors of the explorer surfaces that the built-in Iced palettes do not cover.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_secondary: Color,
    pub text_secondary: Color,
    /// Background of the previewed row in the My Data list.
    pub highlight: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_secondary: palette::GRAY_100,
            text_secondary: palette::GRAY_700,
            highlight: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            text_secondary: palette::GRAY_200,
            highlight: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::PRIMARY_600
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        // System depends on the host; only check it resolves.
        let _ = ThemeMode::System.theme();
    }

    #[test]
    fn light_scheme_has_light_surface() {
        assert!(ColorScheme::light().surface_secondary.r > 0.8);
        assert!(ColorScheme::dark().surface_secondary.r < 0.2);
    }

    #[test]
    fn highlight_is_translucent_brand_color() {
        let light = ColorScheme::light().highlight;
        assert!(light.a < 1.0);
        assert!(light.b > light.r);
    }
}
