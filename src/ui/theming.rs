// SPDX-License-Identifier: MPL-2.0
//! Theme mode and the color scheme used by the carousel.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Unfilled part of an indicator bar.
    pub indicator_track: Color,
    /// Filled part of an indicator bar while it is active.
    pub indicator_fill: Color,

    pub spinner: Color,
    pub error: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            indicator_track: palette::GRAY_150,
            indicator_fill: palette::PRIMARY_500,
            spinner: palette::PRIMARY_600,
            error: palette::ERROR_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            indicator_track: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_400
            },
            indicator_fill: palette::PRIMARY_400,
            spinner: palette::PRIMARY_400,
            error: palette::ERROR_500,
        }
    }
}

/// Theme configuration resolved from the configured mode.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
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
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Returns the built-in iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = if mode.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
