//! Mouse click handling.
//!
//! Clicks are resolved against the same [`ScreenLayout`] the last frame was
//! drawn with, so what you click is what you saw.

use crate::app::{Action, App};
use crate::ui::layout::ScreenLayout;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

/// Maps a mouse event to an action for a frame of size `area`.
///
/// Only left-button presses count. A click on a cell plays there; a click on
/// a move-list row jumps to that step.
pub fn action_for_mouse(event: MouseEvent, area: Rect, app: &App) -> Option<Action> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let session = app.session();
    let layout = ScreenLayout::new(area, session.visible_history().len(), session.step());
    let action = layout
        .cell_at(event.column, event.row)
        .map(Action::Play)
        .or_else(|| layout.move_at(event.column, event.row).map(Action::JumpTo));

    debug!(column = event.column, row = event.row, ?action, "Mouse click");
    action
}
