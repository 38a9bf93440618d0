//! mclang - Minecraft mod translation manager
//!
//! Library behind the `mclang` CLI: the `§` formatting-code engine, the
//! translation workspace store, configuration, and the terminal browser.

pub mod cli;
pub mod config;
pub mod formatting;
pub mod theme;
pub mod translations;
pub mod tui;

pub use config::Config;
pub use formatting::{contains_formatting, segment, strip_formatting, Segment, TextStyle};
pub use translations::{TranslationEntry, TranslationError, TranslationStore};
