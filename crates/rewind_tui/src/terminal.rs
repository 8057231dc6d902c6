//! Terminal setup, teardown and the main event loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::{input, mouse, ui};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use rewind_tictactoe::GameSession;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Sends tracing output to the configured log file so it never draws over
/// the TUI.
pub fn init_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized

    Ok(())
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// event loop and panics.
#[instrument(skip_all, fields(step = session.step()))]
pub fn run_tui(config: &TuiConfig, session: GameSession) -> Result<()> {
    info!("Starting Rewind TUI");

    let mouse = *config.mouse();
    install_panic_hook(mouse);
    let mut terminal = setup(mouse).context("Failed to prepare terminal")?;

    let app = App::new(session).with_key_hints(*config.show_key_hints());
    let tick = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick);

    restore(&mut terminal, mouse).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn raw_mode(on: bool) -> io::Result<()> {
    if on { enable_raw_mode() } else { disable_raw_mode() }
}

/// Switches raw mode on and enters the alternate screen.
///
/// If any step after raw mode fails, everything already switched on is
/// switched back off before the error is returned.
fn enter<W: Write>(
    out: &mut W,
    mouse: bool,
    raw_mode: impl Fn(bool) -> io::Result<()>,
) -> io::Result<()> {
    raw_mode(true)?;
    let entered = execute!(out, EnterAlternateScreen).and_then(|()| {
        if mouse {
            execute!(out, EnableMouseCapture)
        } else {
            Ok(())
        }
    });
    if let Err(e) = entered {
        let _ = leave(out, mouse, &raw_mode);
        return Err(e);
    }
    Ok(())
}

/// Undoes [`enter`]. Every step is attempted; the first error is returned.
fn leave<W: Write>(
    out: &mut W,
    mouse: bool,
    raw_mode: impl Fn(bool) -> io::Result<()>,
) -> io::Result<()> {
    let raw = raw_mode(false);
    let screen = execute!(out, LeaveAlternateScreen);
    let capture = if mouse {
        execute!(out, DisableMouseCapture)
    } else {
        Ok(())
    };
    raw.and(screen).and(capture)
}

fn setup(mouse: bool) -> Result<Tui> {
    let mut stdout = io::stdout();
    enter(&mut stdout, mouse, raw_mode)?;
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = leave(&mut io::stdout(), mouse, raw_mode);
            Err(e.into())
        }
    }
}

fn restore(terminal: &mut Tui, mouse: bool) -> Result<()> {
    leave(terminal.backend_mut(), mouse, raw_mode)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Puts the terminal back before the panic message is printed, so the
/// message lands on the normal screen.
fn install_panic_hook(mouse: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut stdout = io::stdout();
        let _ = leave(&mut stdout, mouse, raw_mode);
        let _ = execute!(stdout, Show);
        default_hook(info);
    }));
}

/// One event at a time: draw, wait up to `tick` for input, apply it.
fn run_app(terminal: &mut Tui, mut app: App, tick: Duration) -> Result<()> {
    loop {
        let area: Rect = terminal.draw(|f| ui::draw(f, &app))?.area;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(tick)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => input::action_for_key(key),
            Event::Mouse(m) => mouse::action_for_mouse(m, area, &app),
            _ => None,
        };

        if let Some(action) = action {
            app.apply(action);
        }
    }
}
