//! TUI (Text User Interface) module for mclang
//!
//! Terminal-based translation browser built on ratatui/crossterm.

pub mod app;
pub mod browse_app;
pub mod event;
pub mod preview;
pub mod ui;

pub use browse_app::{BrowseApp, BrowseState};
