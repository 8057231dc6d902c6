//! Move list rendering.

use super::layout::ScreenLayout;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use rewind_tictactoe::GameSession;

/// Row text for history entry `step`, numbered from 1.
pub fn move_label(session: &GameSession, step: usize) -> Option<String> {
    session
        .history()
        .get(step)
        .map(|entry| format!("{:>2}. {}", step + 1, entry.jump_label()))
}

/// Renders the rows of the move list that fit: the current step bold, the
/// selection reversed while the list has focus.
pub fn render_moves(
    frame: &mut Frame,
    layout: &ScreenLayout,
    session: &GameSession,
    selected: Option<usize>,
) {
    let border = if selected.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::bordered().title(" Moves ").border_style(border);

    let lines: Vec<Line> = layout
        .shown_moves()
        .filter_map(|step| {
            let label = move_label(session, step)?;
            let mut style = Style::default();
            if step == session.step() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if selected == Some(step) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Some(Line::styled(label, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), layout.moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Position;

    #[test]
    fn test_move_labels_are_numbered() {
        let session = GameSession::replay([Position::BottomLeft]);
        assert_eq!(move_label(&session, 0).as_deref(), Some(" 1. Go to game start"));
        assert_eq!(
            move_label(&session, 1).as_deref(),
            Some(" 2. Go to move: X -> (2, 0)")
        );
        assert_eq!(move_label(&session, 2), None);
    }
}
