//! Theme system for the TUI
//!
//! Provides color schemes and the mapping from sentiment classes to colors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::analysis::{ScoreBucket, SentimentTone};

/// Theme preset, selectable with `[ui] theme = "..."`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    CatppuccinMocha,
    Nord,
    Dracula,
}

impl ThemePreset {
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemePreset::CatppuccinMocha => "Catppuccin Mocha",
            ThemePreset::Nord => "Nord",
            ThemePreset::Dracula => "Dracula",
        }
    }
}

/// Theme colors for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_main: Color,
    pub bg_dark: Color,

    // Border colors
    pub border: Color,
    pub border_focused: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub cyan: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub purple: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

impl Theme {
    pub fn from_preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::CatppuccinMocha => Self::catppuccin_mocha(),
            ThemePreset::Nord => Self::nord(),
            ThemePreset::Dracula => Self::dracula(),
        }
    }

    /// Catppuccin Mocha theme (default)
    pub fn catppuccin_mocha() -> Self {
        Self {
            bg_main: Color::Rgb(30, 30, 46),
            bg_dark: Color::Rgb(24, 24, 37),

            border: Color::Rgb(69, 71, 90),
            border_focused: Color::Rgb(203, 166, 247),

            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(166, 173, 200),
            text_muted: Color::Rgb(108, 112, 134),

            cyan: Color::Rgb(148, 226, 213),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            red: Color::Rgb(243, 139, 168),
            purple: Color::Rgb(203, 166, 247),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg_main: Color::Rgb(46, 52, 64), // nord0
            bg_dark: Color::Rgb(40, 44, 52),

            border: Color::Rgb(76, 86, 106),           // nord3
            border_focused: Color::Rgb(180, 142, 173), // nord15

            text_primary: Color::Rgb(236, 239, 244),   // nord6
            text_secondary: Color::Rgb(229, 233, 240), // nord5
            text_muted: Color::Rgb(143, 157, 179),     // nord4

            cyan: Color::Rgb(136, 192, 208),   // nord8
            green: Color::Rgb(163, 190, 140),  // nord14
            yellow: Color::Rgb(235, 203, 139), // nord13
            red: Color::Rgb(191, 97, 106),     // nord11
            purple: Color::Rgb(180, 142, 173), // nord15
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            bg_main: Color::Rgb(40, 42, 54),
            bg_dark: Color::Rgb(33, 34, 44),

            border: Color::Rgb(68, 71, 90),
            border_focused: Color::Rgb(189, 147, 249),

            text_primary: Color::Rgb(248, 248, 242),
            text_secondary: Color::Rgb(191, 191, 191),
            text_muted: Color::Rgb(98, 114, 164),

            cyan: Color::Rgb(139, 233, 253),
            green: Color::Rgb(80, 250, 123),
            yellow: Color::Rgb(241, 250, 140),
            red: Color::Rgb(255, 85, 85),
            purple: Color::Rgb(189, 147, 249),
        }
    }

    /// Text color for a sentiment label
    pub fn tone_color(&self, tone: SentimentTone) -> Color {
        match tone {
            SentimentTone::Positive => self.green,
            SentimentTone::Negative => self.red,
            SentimentTone::Neutral => self.yellow,
        }
    }

    /// Border color for a score
    pub fn bucket_color(&self, bucket: ScoreBucket) -> Color {
        match bucket {
            ScoreBucket::Positive => self.green,
            ScoreBucket::Negative => self.red,
            ScoreBucket::Neutral => self.yellow,
        }
    }
}
