//! Ratatui styles for the translation browser

use ratatui::style::{Color, Modifier, Style};

use super::Theme;

fn fg(color: Color) -> Style {
    Style::new().fg(color)
}

impl Theme {
    /// Entry keys and translated text
    pub fn text_style(&self) -> Style {
        fg(self.text_primary)
    }

    /// Base-language text, hints and borders
    pub fn text_secondary_style(&self) -> Style {
        fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        fg(self.accent)
    }

    /// Key names in the footer and panel titles
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    /// Untranslated markers and validation issues
    pub fn warning_style(&self) -> Style {
        fg(self.warning)
    }

    pub fn success_style(&self) -> Style {
        fg(self.success)
    }

    /// Selected list row, drawn inverted on the accent color.
    pub fn highlight_style(&self) -> Style {
        fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
