//! Preview command handler

use anyhow::Result;

use mclang::formatting::{is_code_suffix, plain_text, render, unknown_codes, SENTINEL};
use mclang::theme::current_theme;
use mclang::Config;

use super::render_text;

/// Output format for the preview command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFormat {
    Terminal,
    Plain,
    Html,
    Segments,
}

/// Render `text` in the requested format.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str, format: PreviewFormat, ampersand: bool) -> Result<()> {
    let config = Config::load()?;
    let scanner = config.scanner();
    let theme = current_theme();

    let text = if ampersand {
        ampersand_to_sentinel(text)
    } else {
        text.to_string()
    };

    for unknown in unknown_codes(&text) {
        eprintln!(
            "{}",
            theme.warning_text(&format!(
                "Unknown formatting code {} at position {}",
                unknown.token(),
                unknown.offset
            ))
        );
    }

    let segments = scanner.segment(&text);
    match format {
        PreviewFormat::Terminal => println!("{}", render_text(&scanner, &text)),
        PreviewFormat::Plain => println!("{}", plain_text(&segments)),
        PreviewFormat::Html => println!("{}", render::to_html(&segments)),
        PreviewFormat::Segments => print!("{}", render::describe(&segments)),
    }
    Ok(())
}

/// Replace `&` with the sentinel wherever it is followed by a code suffix.
pub fn ampersand_to_sentinel(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&' && chars.peek().is_some_and(|next| is_code_suffix(*next)) {
            out.push(SENTINEL);
        } else {
            out.push(c);
        }
    }
    out
}
