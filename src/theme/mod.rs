//! Colors for command output and the browser
//!
//! The default palette is taken from the formatting-code table itself so
//! the tool looks like the text it edits. Colors of formatted text come
//! from the codes, never from the theme.

use ratatui::style::Color;

use crate::formatting::lookup;

pub mod cli;
pub mod tui;

pub use cli::{color_to_ansi, colors_enabled, ANSI_RESET};

#[derive(Debug, Clone)]
pub struct Theme {
    pub text_primary: Color,
    /// Base-language text and hints
    pub text_secondary: Color,
    /// Headers, key names and the selected row
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gold()
    }
}

impl Theme {
    /// Palette built from the color codes: gray text on a gold accent.
    pub fn gold() -> Self {
        Self {
            text_primary: code_color('7'),
            text_secondary: code_color('8'),
            accent: code_color('6'),
            warning: code_color('e'),
            error: code_color('c'),
            success: code_color('a'),
        }
    }

    /// The 16 named terminal colors, for terminals without truecolor.
    pub fn plain() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::Gray,
            accent: Color::Cyan,
            warning: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

/// Terminal color of a color code, `Reset` for anything else.
fn code_color(suffix: char) -> Color {
    lookup(suffix)
        .and_then(|code| code.rgb())
        .map_or(Color::Reset, |rgb| Color::Rgb(rgb.r, rgb.g, rgb.b))
}

pub fn current_theme() -> Theme {
    Theme::default()
}
