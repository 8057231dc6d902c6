//! Stateless UI rendering.

pub mod board;
pub mod layout;
pub mod moves;

use crate::app::{App, Focus};
use layout::ScreenLayout;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

const KEY_HELP: &str = "1-9/enter play  arrows move  tab moves  g start  r restart  q quit";

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let session = app.session();
    let layout = ScreenLayout::new(
        frame.area(),
        session.visible_history().len(),
        session.step(),
    );

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let cursor = (app.focus() == Focus::Board).then(|| app.cursor());
    board::render_board(frame, &layout, session, cursor, app.show_key_hints());

    let status = Paragraph::new(session.status_text())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::bordered().title(" Status "));
    frame.render_widget(status, layout.status);

    let selected = (app.focus() == Focus::Moves).then(|| app.selected());
    moves::render_moves(frame, &layout, session, selected);

    let footer = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}
