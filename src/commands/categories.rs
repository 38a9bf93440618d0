//! Categories command handler

use anyhow::Result;
use std::path::Path;

use mclang::theme::current_theme;

use super::open_store;

/// List every category with its subcategories.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>) -> Result<()> {
    let (_config, store) = open_store(workspace)?;
    let theme = current_theme();
    let categories = store.categories();

    if categories.is_empty() {
        println!("{}", theme.primary_text("No categories found."));
        return Ok(());
    }

    println!(
        "{}",
        theme.accent_text(&format!("Categories ({}):", categories.len()))
    );
    for category in categories {
        let subcategories = store.subcategories(category);
        println!(
            "  {} {}",
            theme.primary_text(category),
            theme.secondary_text(&format!("({})", subcategories.join(", ")))
        );
    }
    Ok(())
}
