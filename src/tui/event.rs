//! Input thread for the browser
//!
//! Terminal input is polled on a background thread and handed to the
//! render loop over a channel. A tick is sent whenever no input arrived
//! within the tick rate.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone)]
pub enum Event {
    Resize(u16, u16),
    Key(KeyEvent),
    Tick,
    /// Ctrl+C, delivered in every mode
    Quit,
}

/// Ctrl+C quits from any mode. `q` and `Esc` are left to the browser
/// because they mean something else while editing.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a terminal event to a browser event, dropping the ones it ignores.
fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if is_interrupt(&key) => Some(Event::Quit),
        TermEvent::Key(key) => Some(Event::Key(key)),
        TermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

pub struct EventHandler {
    rx: Receiver<Event>,
    _poller: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let poller = thread::spawn(move || poll_loop(&tx, tick_rate));
        Self {
            rx,
            _poller: poller,
        }
    }

    /// Block until the next event. Fails once the input thread has stopped.
    pub fn next(&self) -> Result<Event> {
        self.rx
            .recv()
            .map_err(|e| anyhow!("Input thread stopped: {}", e))
    }
}

/// Runs until the receiver is dropped, input fails, or Ctrl+C is read.
fn poll_loop(tx: &Sender<Event>, tick_rate: Duration) {
    loop {
        let event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(raw) => translate(raw),
                Err(e) => {
                    debug!(error = %e, "Reading terminal input failed");
                    return;
                }
            },
            Ok(false) => Some(Event::Tick),
            Err(e) => {
                debug!(error = %e, "Polling terminal input failed");
                return;
            }
        };
        let Some(event) = event else {
            continue;
        };
        let quit = matches!(event, Event::Quit);
        if tx.send(event).is_err() || quit {
            return;
        }
    }
}
