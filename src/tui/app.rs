//! Raw-mode terminal owned by the translation browser
//!
//! The terminal is switched to raw mode and the alternate screen while an
//! [`App`] is alive and put back when it is dropped, also on early returns.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::debug;

use super::event::{Event, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Terminal plus the input thread feeding it.
pub struct App {
    terminal: Tui,
    events: EventHandler,
}

impl App {
    /// Take over the terminal and start polling input every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let terminal = enter_terminal().context("Failed to initialize terminal")?;
        debug!(tick_ms = tick_rate.as_millis() as u64, "Entered browser screen");
        Ok(Self {
            terminal,
            events: EventHandler::new(tick_rate),
        })
    }

    /// Block until the input thread delivers the next event.
    pub fn next_event(&self) -> Result<Event> {
        self.events.next()
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        leave_terminal();
        let _ = self.terminal.show_cursor();
    }
}

/// Switch to raw mode and the alternate screen, undoing the first step
/// if a later one fails.
fn enter_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let result = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    if result.is_err() {
        leave_terminal();
    }
    result
}

fn leave_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
