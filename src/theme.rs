//! Theme signal for light and dark mode.
//!
//! The theme is ambient state read at render time. Highlights never store
//! a resolved color, so switching the theme recolors every existing overlay.

use serde::{Deserialize, Serialize};

/// Theme choice - light or dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Map a "dark mode enabled" flag to a theme.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Get the display name for this theme.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}
