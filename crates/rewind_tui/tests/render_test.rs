//! Rendering tests against an in-memory terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
};
use rewind_tictactoe::{GameSession, Position};
use rewind_tui::ui::{self, layout::ScreenLayout};
use rewind_tui::{Action, App, input, mouse};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn render(app: &App) -> Buffer {
    render_sized(app, WIDTH, HEIGHT)
}

fn render_sized(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(buffer: &Buffer, needle: &str) -> bool {
    lines(buffer).iter().any(|line| line.contains(needle))
}

fn layout(app: &App) -> ScreenLayout {
    ScreenLayout::new(
        Rect::new(0, 0, WIDTH, HEIGHT),
        app.session().visible_history().len(),
        app.session().step(),
    )
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_initial_screen() {
    let buffer = render(&App::new(GameSession::new()));

    assert!(screen_contains(&buffer, "Rewind Tic-Tac-Toe"));
    assert!(screen_contains(&buffer, "Next player: X"));
    assert!(screen_contains(&buffer, " 1. Go to game start"));
    assert!(!screen_contains(&buffer, "Go to move"));
}

#[test]
fn test_marks_and_move_list_after_moves() {
    let app = App::new(GameSession::replay([Position::Center, Position::TopRight]));
    let buffer = render(&app);
    let layout = layout(&app);

    let center = layout.cells[4];
    assert_eq!(buffer[(center.x + 3, center.y + 1)].symbol(), "X");
    let top_right = layout.cells[2];
    assert_eq!(buffer[(top_right.x + 3, top_right.y + 1)].symbol(), "O");

    assert!(screen_contains(&buffer, " 2. Go to move: X -> (1, 1)"));
    assert!(screen_contains(&buffer, " 3. Go to move: O -> (0, 2)"));
    assert!(screen_contains(&buffer, "Next player: X"));
}

#[test]
fn test_winning_line_is_highlighted() {
    use Position::*;
    let app = App::new(GameSession::replay([TopLeft, MiddleLeft, TopCenter, Center, TopRight]));
    let buffer = render(&app);
    let layout = layout(&app);

    assert!(screen_contains(&buffer, "Winner: X"));
    for i in [0, 1, 2] {
        let cell = layout.cells[i];
        assert_eq!(buffer[(cell.x, cell.y)].bg, Color::Yellow, "cell {i}");
    }
    for i in [3, 4] {
        let cell = layout.cells[i];
        assert_ne!(buffer[(cell.x, cell.y)].bg, Color::Yellow, "cell {i}");
    }
}

#[test]
fn test_cats_game_status() {
    let app = App::new(cats_game());
    let buffer = render(&app);

    assert!(screen_contains(&buffer, "Cat's game"));
    assert!(screen_contains(&buffer, "10. Go to move: X -> (2, 2)"));
}

fn cats_game() -> GameSession {
    use Position::*;
    GameSession::replay([
        TopLeft,
        Center,
        TopRight,
        TopCenter,
        BottomCenter,
        MiddleRight,
        MiddleLeft,
        BottomLeft,
        BottomRight,
    ])
}

#[test]
fn test_short_terminal_scrolls_move_list_to_current_step() {
    const SHORT: u16 = 14;
    let mut app = App::new(cats_game());
    let buffer = render_sized(&app, WIDTH, SHORT);

    assert!(screen_contains(&buffer, "10. Go to move: X -> (2, 2)"));
    assert!(!screen_contains(&buffer, "Go to game start"));

    let area = Rect::new(0, 0, WIDTH, SHORT);
    let layout = ScreenLayout::new(area, 10, 9);
    let last = *layout.move_rows.last().unwrap();
    assert!(buffer[(last.x + 1, last.y)].modifier.contains(Modifier::BOLD));

    // Clicking the bottom row jumps to the step drawn there.
    let click = mouse::action_for_mouse(left_click(last.x + 2, last.y), area, &app);
    assert_eq!(click, Some(Action::JumpTo(9)));

    app.apply(Action::JumpTo(0));
    assert!(screen_contains(&render_sized(&app, WIDTH, SHORT), " 1. Go to game start"));
}

#[test]
fn test_current_step_is_bold() {
    let mut app = App::new(GameSession::replay([Position::Center, Position::TopLeft]));
    app.apply(Action::JumpTo(1));
    let buffer = render(&app);
    let layout = layout(&app);

    assert_eq!(layout.move_rows.len(), 2);
    let current = layout.move_rows[1];
    let other = layout.move_rows[0];
    assert!(buffer[(current.x + 1, current.y)].modifier.contains(Modifier::BOLD));
    assert!(!buffer[(other.x + 1, other.y)].modifier.contains(Modifier::BOLD));
    assert!(!screen_contains(&buffer, "O -> (0, 0)"));
}

#[test]
fn test_click_play_then_jump_then_branch() {
    let mut app = App::new(GameSession::new());

    for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
        let cell = layout(&app).cells[pos.to_index()];
        let action = mouse::action_for_mouse(
            left_click(cell.x + 1, cell.y + 1),
            Rect::new(0, 0, WIDTH, HEIGHT),
            &app,
        );
        app.apply(action.expect("click lands on a cell"));
    }
    assert_eq!(app.session().history().len(), 4);

    // Jump back to after the first move by clicking its row.
    let row = layout(&app).move_rows[1];
    let jump = mouse::action_for_mouse(
        left_click(row.x + 2, row.y),
        Rect::new(0, 0, WIDTH, HEIGHT),
        &app,
    );
    app.apply(jump.expect("click lands on a move row"));
    assert_eq!(app.session().step(), 1);
    assert!(screen_contains(&render(&app), "Next player: O"));

    // Digit key 3 plays top-right for O and discards the old future.
    let key = input::action_for_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));
    app.apply(key.expect("digit maps to a cell"));

    assert_eq!(app.session().history().len(), 3);
    let buffer = render(&app);
    assert!(screen_contains(&buffer, " 3. Go to move: O -> (0, 2)"));
    assert!(!screen_contains(&buffer, "O -> (0, 0)"));
}

#[test]
fn test_key_hints_can_be_hidden() {
    let app = App::new(GameSession::new()).with_key_hints(false);
    let buffer = render(&app);
    let layout = layout(&app);

    let cell = layout.cells[6];
    assert_eq!(buffer[(cell.x + 3, cell.y + 1)].symbol(), " ");
}
