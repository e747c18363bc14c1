//! Keyboard mapping for the widget.
//!
//! Each key stands in for one of the widget's buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::timer::Action;
use crate::types::{LengthDelta, Phase};

/// Shortens the break.
pub const BREAK_DECREMENT_KEY: char = 'b';
/// Lengthens the break.
pub const BREAK_INCREMENT_KEY: char = 'B';
/// Shortens the session.
pub const SESSION_DECREMENT_KEY: char = 's';
/// Lengthens the session.
pub const SESSION_INCREMENT_KEY: char = 'S';
/// Restores the defaults.
pub const RESET_KEY: char = 'r';
/// Leaves the widget.
pub const QUIT_KEY: char = 'q';

/// Key legend shown under the panel.
pub const KEY_HINTS: &str = "b/B break -/+  s/S session -/+  space start/pause  r reset  q quit";

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the widget
    Widget(Action),
    /// Tear the widget down
    Quit,
}

/// Maps a key event to a command. Releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char(BREAK_DECREMENT_KEY) => Action::Adjust(Phase::Break, LengthDelta::Decrement),
        KeyCode::Char(BREAK_INCREMENT_KEY) => Action::Adjust(Phase::Break, LengthDelta::Increment),
        KeyCode::Char(SESSION_DECREMENT_KEY) => {
            Action::Adjust(Phase::Session, LengthDelta::Decrement)
        }
        KeyCode::Char(SESSION_INCREMENT_KEY) => {
            Action::Adjust(Phase::Session, LengthDelta::Increment)
        }
        KeyCode::Char(' ') | KeyCode::Enter => Action::ToggleRunning,
        KeyCode::Char(RESET_KEY) => Action::Reset,
        KeyCode::Char(QUIT_KEY) | KeyCode::Esc => return Some(Command::Quit),
        _ => return None,
    };

    Some(Command::Widget(action))
}
