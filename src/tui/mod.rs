//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

use crate::config::TuiConfig;

pub use app::App;
pub use input::Focus;
pub use ui::{Hit, ScreenLayout, draw};

/// Run the interactive terminal client.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    // Log to a file; the terminal is in raw mode while the UI runs.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(descending = config.descending(), "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut app = App::new(!*config.descending());
    let res = with_restore(
        || {
            execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
            Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
        },
        |mut terminal| run_app(&mut terminal, &mut app),
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.session().history().last_index(), "TUI closed");
    res
}

/// Runs `body` on whatever `setup` builds, then calls `restore` even if
/// either of them failed. The first error is returned.
fn with_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    body: impl FnOnce(T) -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let res = setup().and_then(body);
    let restored = restore();
    res.and(restored)
}

/// Leaves raw mode and the alternate screen and shows the cursor again.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}

/// Event loop: draw, then block on the next input event.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut layout = None;
        terminal.draw(|f| layout = Some(draw(f, app)))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(hit) = layout.and_then(|l| l.hit(mouse.column, mouse.row)) {
                    app.handle_click(hit);
                } else {
                    debug!(column = mouse.column, row = mouse.row, "Click outside controls");
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);
        let ran = Cell::new(false);
        let res = with_restore(
            || -> Result<()> { anyhow::bail!("no alternate screen") },
            |()| {
                ran.set(true);
                Ok(())
            },
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(res.unwrap_err().to_string().contains("no alternate screen"));
        assert!(!ran.get());
        assert!(restored.get());
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let res = with_restore(
            || Ok(()),
            |()| anyhow::bail!("loop failed"),
            || anyhow::bail!("restore failed"),
        );
        assert_eq!(res.unwrap_err().to_string(), "loop failed");
    }

    #[test]
    fn test_restore_error_reported_after_clean_run() {
        let res = with_restore(|| Ok(()), |()| Ok(()), || anyhow::bail!("restore failed"));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
    }
}
