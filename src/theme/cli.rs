//! Themed ANSI text for command output
//!
//! Every helper degrades to the bare text when `NO_COLOR` is set or
//! `[formatting].color` is false.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::Color;

use super::Theme;

pub const ANSI_RESET: &str = "\x1b[0m";

static COLORS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turn off colored output for the rest of the process.
pub fn disable_colors() {
    COLORS_DISABLED.store(true, Ordering::Relaxed);
}

/// Whether command output may contain escape sequences.
pub fn colors_enabled() -> bool {
    !COLORS_DISABLED.load(Ordering::Relaxed)
        && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

/// Foreground escape sequence for a terminal color.
///
/// Named colors use the 16-color codes, `Rgb` uses a truecolor sequence.
/// Colors with no foreground meaning map to an empty string.
pub fn color_to_ansi(color: Color) -> Cow<'static, str> {
    let code = match color {
        Color::Rgb(r, g, b) => return Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Color::Indexed(i) => return Cow::Owned(format!("\x1b[38;5;{}m", i)),
        Color::Reset => return Cow::Borrowed(ANSI_RESET),
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::LightRed => 91,
        Color::LightGreen => 92,
        Color::LightYellow => 93,
        Color::LightBlue => 94,
        Color::LightMagenta => 95,
        Color::LightCyan => 96,
        Color::White => 97,
    };
    Cow::Owned(format!("\x1b[{}m", code))
}

fn paint(color: Color, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

impl Theme {
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text, colors_enabled())
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text, colors_enabled())
    }

    /// Dimmed text: base-language values, paths, counts
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text, colors_enabled())
    }

    pub fn warning_text(&self, text: &str) -> String {
        paint(self.warning, text, colors_enabled())
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text, colors_enabled())
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text, colors_enabled())
    }
}
