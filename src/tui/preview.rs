//! Conversion of formatted text into ratatui lines

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::formatting::{Scanner, Segment, TextStyle};

/// Ratatui style equivalent of a segment style.
pub fn span_style(style: &TextStyle) -> Style {
    let mut out = Style::default().fg(Color::Rgb(style.color.r, style.color.g, style.color.b));
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.underline {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    if style.strikethrough {
        out = out.add_modifier(Modifier::CROSSED_OUT);
    }
    out
}

/// Build display lines from segments, splitting on `\n`.
///
/// Always returns at least one line.
pub fn segments_to_lines(segments: &[Segment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        let style = span_style(&segment.style);
        let mut parts = segment.text.split('\n');
        if let Some(first) = parts.next() {
            if !first.is_empty() {
                current.push(Span::styled(first.to_string(), style));
            }
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

/// Segment `text` with `scanner` and build its display lines.
pub fn formatted_lines(scanner: &Scanner, text: &str) -> Vec<Line<'static>> {
    segments_to_lines(&scanner.segment(text))
}
