//! Event handling for the TUI
//!
//! Handles keyboard, paste, and terminal events using crossterm.

use std::time::Duration;

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events that can occur in the TUI
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Paste event (bracketed paste)
    Paste(String),
    /// Nothing happened within the poll timeout
    Tick,
}

/// Handles events from the terminal
#[derive(Debug)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::with_tick_rate(Duration::from_millis(100))
    }
}

impl EventHandler {
    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event, returning `Event::Tick` when the tick rate elapses
    pub fn poll(&self) -> anyhow::Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(Self::convert_event(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }

    fn convert_event(event: event::Event) -> Event {
        match event {
            // Windows reports both press and release
            event::Event::Key(key) if key.kind != KeyEventKind::Release => Event::Key(key),
            event::Event::Resize(cols, rows) => Event::Resize(cols, rows),
            event::Event::Paste(text) => Event::Paste(text),
            _ => Event::Tick,
        }
    }
}

impl Event {
    /// Check if this is a quit key (Ctrl-C, Ctrl-Q or Esc)
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c') | KeyCode::Char('q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) | Event::Key(KeyEvent {
                code: KeyCode::Esc,
                ..
            })
        )
    }
}
