//! Keyboard mapping.

use crate::app::{Action, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rewind_tictactoe::Position;

/// Maps a key event to an action.
///
/// Only presses count; repeats and releases are ignored so terminals that
/// report both do not play twice.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::JumpTo(0)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Navigate(Direction::Right)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Play),
        _ => None,
    }
}
