//! Codes command handler

use anyhow::Result;

use mclang::formatting::{codes_of_kind, CodeKind};
use mclang::theme::current_theme;
use mclang::Config;

use super::render_text;

/// Print the formatting code table, each name rendered in its own style.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    let scanner = config.scanner();
    let theme = current_theme();

    let sections = [
        ("Colors:", CodeKind::Color),
        ("Styles:", CodeKind::Style),
        ("Reset:", CodeKind::Reset),
    ];
    for (index, (title, kind)) in sections.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", theme.accent_text(title));
        for code in codes_of_kind(kind) {
            let sample = render_text(&scanner, &format!("{}{:<14}", code.token(), code.name));
            let hex = code.rgb().map(|rgb| rgb.to_string()).unwrap_or_default();
            println!(
                "  {}  {} {}",
                theme.primary_text(&code.token()),
                sample,
                theme.secondary_text(&hex)
            );
        }
    }
    Ok(())
}
