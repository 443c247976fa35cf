//! Theme palettes for version coloring
//!
//! Two fixed hue/shade tables, one per theme, plus one reserved default
//! color per theme for versions outside every color group. Each of the 10
//! hue rows carries 4 shades ordered brightest to dimmest. The tables are
//! immutable constant data; the active theme is always an explicit argument,
//! never ambient state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hue rows in a palette table
pub const PALETTE_SIZE: usize = 10;

/// Number of shades per hue row, brightest first
pub const SHADES_PER_HUE: usize = 4;

/// Rendering theme selecting the palette table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the string representation of the theme
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeParseError::UnknownTheme(s.to_string())),
        }
    }
}

/// Error type for theme parsing
#[derive(Error, Debug)]
pub enum ThemeParseError {
    /// The name is not one of the supported themes
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// A fixed hue/shade table with a reserved default color
#[derive(Debug)]
pub struct Palette {
    hues: [[&'static str; SHADES_PER_HUE]; PALETTE_SIZE],
    default_color: &'static str,
}

/// Table tuned for light backgrounds
static LIGHT: Palette = Palette {
    hues: [
        ["#42a5f5", "#2196f3", "#1e88e5", "#1976d2"], // blue
        ["#66bb6a", "#4caf50", "#43a047", "#388e3c"], // green
        ["#ffa726", "#ff9800", "#fb8c00", "#f57c00"], // orange
        ["#ab47bc", "#9c27b0", "#8e24aa", "#7b1fa2"], // purple
        ["#26a69a", "#009688", "#00897b", "#00796b"], // teal
        ["#ec407a", "#e91e63", "#d81b60", "#c2185b"], // pink
        ["#5c6bc0", "#3f51b5", "#3949ab", "#303f9f"], // indigo
        ["#ffca28", "#ffc107", "#ffb300", "#ffa000"], // amber
        ["#26c6da", "#00bcd4", "#00acc1", "#0097a7"], // cyan
        ["#ff7043", "#ff5722", "#f4511e", "#e64a19"], // deep orange
    ],
    default_color: "#757575",
};

/// Table tuned for dark backgrounds, one step brighter per shade
static DARK: Palette = Palette {
    hues: [
        ["#64b5f6", "#42a5f5", "#2196f3", "#1e88e5"], // blue
        ["#81c784", "#66bb6a", "#4caf50", "#43a047"], // green
        ["#ffb74d", "#ffa726", "#ff9800", "#fb8c00"], // orange
        ["#ba68c8", "#ab47bc", "#9c27b0", "#8e24aa"], // purple
        ["#4db6ac", "#26a69a", "#009688", "#00897b"], // teal
        ["#f06292", "#ec407a", "#e91e63", "#d81b60"], // pink
        ["#7986cb", "#5c6bc0", "#3f51b5", "#3949ab"], // indigo
        ["#ffd54f", "#ffca28", "#ffc107", "#ffb300"], // amber
        ["#4dd0e1", "#26c6da", "#00bcd4", "#00acc1"], // cyan
        ["#ff8a65", "#ff7043", "#ff5722", "#f4511e"], // deep orange
    ],
    default_color: "#bdbdbd",
};

impl Palette {
    /// Table for the given theme
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Color at the given hue row and shade.
    ///
    /// The hue row wraps modulo the table size and the shade clamps to the
    /// dimmest available, so any pair of indices yields a color.
    pub fn color(&self, hue_row: usize, shade: usize) -> &'static str {
        self.hues[hue_row % PALETTE_SIZE][shade.min(SHADES_PER_HUE - 1)]
    }

    /// Reserved color for versions outside every color group
    pub fn default_color(&self) -> &'static str {
        self.default_color
    }
}
