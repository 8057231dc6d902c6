//! Application state and logic.

use rewind_tictactoe::{GameSession, Position};
use tracing::{debug, info, instrument};

/// Which panel receives the arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// Something the user asked for, independent of how it was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a specific cell.
    Play(Position),
    /// Jump to a history step.
    JumpTo(usize),
    /// Activate whatever the focused panel points at.
    Activate,
    /// Move the cursor or selection of the focused panel.
    Navigate(Direction),
    /// Switch focus between board and move list.
    ToggleFocus,
    /// Throw the session away and start over.
    Restart,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_key_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application around an existing session.
    pub fn new(session: GameSession) -> Self {
        let selected = session.step();
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected,
            show_key_hints: true,
            should_quit: false,
        }
    }

    /// Sets whether empty cells show their digit shortcut.
    pub fn with_key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty cells show their digit shortcut.
    pub fn show_key_hints(&self) -> bool {
        self.show_key_hints
    }

    /// Whether the main loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    ///
    /// Rejected moves and jumps leave the session untouched; they are only
    /// logged.
    #[instrument(skip(self), fields(step = self.session.step()))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => self.play(pos),
            Action::JumpTo(step) => self.jump_to(step),
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::Moves => self.jump_to(self.selected),
            },
            Action::Navigate(direction) => self.navigate(direction),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                debug!(focus = ?self.focus, "Focus changed");
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        self.cursor = pos;
        match self.session.play(pos) {
            Ok(status) => {
                debug!(position = ?pos, ?status, "Move accepted");
                self.selected = self.session.step();
            }
            Err(e) => debug!(position = ?pos, error = %e, "Move ignored"),
        }
    }

    fn jump_to(&mut self, step: usize) {
        match self.session.jump_to(step) {
            Ok(status) => {
                debug!(step, ?status, "Jumped");
                self.selected = step;
            }
            Err(e) => debug!(step, error = %e, "Jump ignored"),
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::Moves => {
                let last = self.session.visible_history().len() - 1;
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(last),
                };
            }
        }
    }

    /// Restarts the game.
    fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new(GameSession::new()).with_key_hints(self.show_key_hints);
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}
