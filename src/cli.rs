//! CLI definitions for mclang
//!
//! The clap structures live in the library so that completions can be
//! generated from them and tests can inspect them.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles using the theme colors.
///
/// - Yellow: headers, usage, command names (accent color)
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Yellow.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "mclang")]
#[command(about = "Manage Minecraft mod translations and preview § formatting codes")]
#[command(
    long_about = "mclang - translation manager for Minecraft mod language files.

A workspace is a language folder with one directory per category
(items, quests, ...) and one JSON dictionary per language inside it
(items/en_us.json, items/de_de.json). Texts may contain § formatting
codes, which mclang can strip, validate and preview in color.

QUICK START:
    mclang -w ./lang languages            List languages in a workspace
    mclang -w ./lang stats de_de          Translation progress
    mclang -w ./lang browse               Interactive browser and editor
    mclang preview \"§6Gold §lBold\"        Preview formatted text

The workspace can also be set once in ~/.config/mclang/config.toml
under [workspace].directory."
)]
#[command(version, styles = build_cli_styles())]
pub struct Cli {
    /// Language folder to operate on (overrides the config)
    #[arg(long, short, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List languages found in the workspace
    #[command(long_about = "List every language that has at least one dictionary.

The base language (en_us unless configured otherwise) is marked.

EXAMPLE:
    mclang -w ./lang languages")]
    Languages,

    /// List categories found in the workspace
    #[command(long_about = "List every category directory with its subcategories.

Subcategories are derived from the second dotted segment of each key
(item.sword.name -> sword). Keys without one fall into 'general'.

EXAMPLE:
    mclang -w ./lang categories")]
    Categories,

    /// Add a new language with empty translations
    #[command(
        name = "add-language",
        long_about = "Create a new language from the base language.

Every base key is copied with an empty translation and a dictionary is
written into each category directory.

EXAMPLE:
    mclang -w ./lang add-language pt_br"
    )]
    AddLanguage {
        /// Language code (e.g. de_de, pt_br)
        #[arg(help = "Language code to create (e.g. pt_br)")]
        code: String,
    },

    /// Validate translations for a language
    #[command(long_about = "Check a language for problems.

Reports empty translations, placeholders (%1$s, {name}) that differ
from the base text, and unknown § formatting codes. Exits with status 1
when any issue is found.

EXAMPLE:
    mclang -w ./lang validate de_de")]
    Validate {
        /// Language code to validate
        #[arg(help = "Language code to validate")]
        code: String,
    },

    /// Export untranslated keys as a text report
    #[command(
        name = "export-untranslated",
        long_about = "Write every untranslated key of a language to a report.

The report groups keys by category and shows the base text without
formatting codes. It is written to --output or printed to stdout.

EXAMPLES:
    mclang -w ./lang export-untranslated fr_fr
    mclang -w ./lang export-untranslated fr_fr -o todo.txt"
    )]
    ExportUntranslated {
        /// Language code to export
        #[arg(help = "Language code to export")]
        code: String,
        /// Output file (stdout when omitted)
        #[arg(long, short, help = "Write the report to this file")]
        output: Option<PathBuf>,
    },

    /// Show translation statistics
    #[command(long_about = "Show translation progress.

Without a language code, one line per non-base language is shown.
With a code, totals per category are listed as well.

EXAMPLES:
    mclang -w ./lang stats
    mclang -w ./lang stats de_de")]
    Stats {
        /// Language code (all languages when omitted)
        #[arg(help = "Language code (all languages when omitted)")]
        code: Option<String>,
    },

    /// List entries of a language
    #[command(
        visible_alias = "ls",
        long_about = "List the entries of a language with their base text.

Formatted text is rendered in color unless NO_COLOR is set or
[formatting].color is false.

EXAMPLES:
    mclang -w ./lang list de_de
    mclang -w ./lang list de_de --category items --untranslated
    mclang -w ./lang ls de_de --formatted"
    )]
    List {
        /// Language code to list
        #[arg(help = "Language code to list")]
        code: String,
        /// Only entries of this category
        #[arg(long, short)]
        category: Option<String>,
        /// Only entries of this subcategory
        #[arg(long, short)]
        subcategory: Option<String>,
        /// Only entries containing formatting codes
        #[arg(long)]
        formatted: bool,
        /// Only entries without a translation
        #[arg(long)]
        untranslated: bool,
    },

    /// Search keys and texts
    #[command(long_about = "Search keys, base texts and translations (case-insensitive).

EXAMPLES:
    mclang -w ./lang search sword
    mclang -w ./lang search schwert --language de_de")]
    Search {
        /// Text to search for
        query: String,
        /// Only search this language
        #[arg(long, short)]
        language: Option<String>,
    },

    /// Set the translation of a key
    #[command(long_about = "Set the translation of one key and save the language.

The base language cannot be edited.

EXAMPLE:
    mclang -w ./lang set de_de item.sword.name \"§bSchwert\"")]
    Set {
        /// Language code
        code: String,
        /// Translation key
        key: String,
        /// New translated text
        text: String,
    },

    /// Preview text with formatting codes
    #[command(long_about = "Render text with § formatting codes.

Without flags the text is printed in terminal colors. Use & in place of §
when your shell makes § hard to type (--ampersand).

EXAMPLES:
    mclang preview \"§6Gold §lbold§r plain\"
    mclang preview --plain \"§6Gold\"
    mclang preview --html \"§cRed\"
    mclang preview --segments -a \"&aGreen &ofancy\"")]
    Preview {
        /// Text to render
        text: String,
        /// Print the text with codes removed
        #[arg(long, conflicts_with_all = ["html", "segments"])]
        plain: bool,
        /// Print the text as HTML spans
        #[arg(long, conflicts_with = "segments")]
        html: bool,
        /// Print every styled segment on its own line
        #[arg(long)]
        segments: bool,
        /// Treat & as the formatting sentinel
        #[arg(long, short)]
        ampersand: bool,
    },

    /// List all formatting codes
    #[command(long_about = "List the 22 formatting codes with their names and colors.

EXAMPLE:
    mclang codes")]
    Codes,

    /// Browse and edit translations interactively
    #[command(long_about = "Open the interactive translation browser.

Shows the entries of a language with a live preview of formatted text.
Press ? inside the browser for key bindings.

EXAMPLES:
    mclang -w ./lang browse
    mclang -w ./lang browse de_de")]
    Browse {
        /// Language to open (first non-base language when omitted)
        code: Option<String>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the mclang configuration file.

Configuration is stored in ~/.config/mclang/config.toml.

EXAMPLES:
    mclang config show          Display current configuration
    mclang config edit          Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLE:
    mclang completions --shell zsh > ~/.zfunc/_mclang")]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').

EXAMPLE:
    EDITOR=nano mclang config edit")]
    Edit,
}
