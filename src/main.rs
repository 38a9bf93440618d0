//! mclang - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mclang::cli::{Cli, Commands, ConfigCommands};
use mclang::theme::{cli::disable_colors, current_theme};
use mclang::translations::EntryFilter;
use mclang::Config;

use commands::preview::PreviewFormat;

/// Environment variable holding the log filter (e.g. `debug`, `mclang=trace`)
const LOG_ENV: &str = "MCLANG_LOG";

fn init_logging() {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();

    // Log lines would corrupt the alternate screen
    if !matches!(cli.command, Commands::Browse { .. }) {
        init_logging();
    }

    // A broken config must not prevent `config edit` from running
    if let Ok(config) = Config::load() {
        if !config.formatting.color {
            disable_colors();
        }
    }

    if let Err(e) = run(cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    let workspace = cli.workspace.as_deref();

    match cli.command {
        Commands::Languages => commands::languages::handle(workspace),
        Commands::Categories => commands::categories::handle(workspace),
        Commands::AddLanguage { code } => commands::add_language::handle(workspace, &code),
        Commands::Validate { code } => commands::validate::handle(workspace, &code),
        Commands::ExportUntranslated { code, output } => {
            commands::export::handle(workspace, &code, output.as_deref())
        }
        Commands::Stats { code } => commands::stats::handle(workspace, code.as_deref()),
        Commands::List {
            code,
            category,
            subcategory,
            formatted,
            untranslated,
        } => {
            let filter = EntryFilter {
                category,
                subcategory,
                formatted_only: formatted,
                untranslated_only: untranslated,
            };
            commands::list::handle(workspace, &code, &filter)
        }
        Commands::Search { query, language } => {
            commands::search::handle(workspace, &query, language.as_deref())
        }
        Commands::Set { code, key, text } => commands::set::handle(workspace, &code, &key, &text),
        Commands::Preview {
            text,
            plain,
            html,
            segments,
            ampersand,
        } => {
            let format = if plain {
                PreviewFormat::Plain
            } else if html {
                PreviewFormat::Html
            } else if segments {
                PreviewFormat::Segments
            } else {
                PreviewFormat::Terminal
            };
            commands::preview::handle(&text, format, ampersand)
        }
        Commands::Codes => commands::codes::handle(),
        Commands::Browse { code } => commands::browse::handle(workspace, code.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(workspace),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
