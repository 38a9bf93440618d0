//! Rendering segments for display surfaces.
//!
//! Provides ANSI truecolor output for the terminal, HTML for exports,
//! and a plain-text description of each segment for debugging.

use super::codes::code_for_color;
use super::types::{Segment, TextStyle};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Build the SGR sequence that selects `style` from a clean state.
pub fn ansi_style(style: &TextStyle) -> String {
    let mut params = vec![
        "0".to_string(),
        format!("38;2;{};{};{}", style.color.r, style.color.g, style.color.b),
    ];
    if style.bold {
        params.push("1".to_string());
    }
    if style.italic {
        params.push("3".to_string());
    }
    if style.underline {
        params.push("4".to_string());
    }
    if style.strikethrough {
        params.push("9".to_string());
    }
    format!("\x1b[{}m", params.join(";"))
}

/// Render segments with 24-bit ANSI escapes, ending with a reset.
pub fn to_ansi(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for segment in segments {
        out.push_str(&ansi_style(&segment.style));
        out.push_str(&segment.text);
    }
    out.push_str(ANSI_RESET);
    out
}

/// Render segments as HTML, one `<span>` per segment.
pub fn to_html(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            format!(
                "<span style=\"{}\">{}</span>",
                css_style(&segment.style),
                escape_html(&segment.text)
            )
        })
        .collect()
}

fn css_style(style: &TextStyle) -> String {
    let mut rules = vec![format!("color: {}", style.color)];
    if style.bold {
        rules.push("font-weight: bold".to_string());
    }
    if style.italic {
        rules.push("font-style: italic".to_string());
    }
    let mut decorations = Vec::new();
    if style.underline {
        decorations.push("underline");
    }
    if style.strikethrough {
        decorations.push("line-through");
    }
    if !decorations.is_empty() {
        rules.push(format!("text-decoration: {}", decorations.join(" ")));
    }
    rules.join("; ")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Describe each segment on its own line: text, color (with its code name
/// when it matches the table) and active flags.
pub fn describe(segments: &[Segment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let color = match code_for_color(segment.style.color) {
                Some(code) => format!("{} ({})", segment.style.color, code.name),
                None => segment.style.color.to_string(),
            };
            let flags = segment.style.flag_names();
            let flags = if flags.is_empty() {
                "-".to_string()
            } else {
                flags.join(",")
            };
            format!("{:>3}. {:?} {} {}", i + 1, segment.text, color, flags)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
