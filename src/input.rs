//! Single-key terminal input for the interactive demo.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// A key press, reduced to what the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Left,
    Right,
    Up,
    Down,
    /// Ctrl+C, which raw mode delivers as a key instead of a signal
    Interrupt,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Other,
        }
    }
}

/// Block until one key is pressed and return it.
///
/// The terminal is put into raw mode for the duration of the read and
/// restored before returning, including when the read fails.
pub fn read_key() -> Result<Key> {
    enable_raw_mode()?;
    let result = wait_for_press();
    let restored = disable_raw_mode();
    let key = result?;
    restored?;
    Ok(key)
}

fn wait_for_press() -> Result<Key> {
    loop {
        if let Event::Key(key) = event::read()? {
            // Release and repeat events are reported on some platforms
            if key.kind == KeyEventKind::Press {
                return Ok(key.into());
            }
        }
    }
}
