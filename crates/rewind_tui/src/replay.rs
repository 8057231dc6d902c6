//! Plain-text rendering of a session for non-interactive use.

use crate::ui::moves::move_label;
use rewind_tictactoe::{GameSession, GameStatus};
use std::fmt::Write;

/// Renders the displayed board, the status line and the visible move list.
///
/// The current step is marked with `>`.
pub fn render_text(session: &GameSession) -> String {
    let mut out = String::new();
    out.push_str(&session.board().display());
    out.push_str("\n\n");
    out.push_str(&session.status_text());
    out.push('\n');

    if let GameStatus::Won { line, .. } = session.status() {
        let cells = line.map(|i| i.to_string()).join(", ");
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Winning line: {}", cells);
    }

    out.push_str("\nMoves:\n");
    for step in 0..session.visible_history().len() {
        let marker = if step == session.step() { '>' } else { ' ' };
        if let Some(label) = move_label(session, step) {
            let _ = writeln!(out, "{} {}", marker, label);
        }
    }
    out
}
