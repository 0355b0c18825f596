//! eperf CLI - binary entry point and terminal session management.
//!
//! The CLI bridges [`eperf_engine`] (application state) and [`eperf_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking)
//! 3. Advance application state (`app.tick()`), which also delivers pending
//!    form outcomes and ages the toast
//! 4. Render frame

mod form;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use eperf_engine::{App, PerfConfig, UiOptions};
use eperf_tui::{draw, handle_events};

use form::DemoForm;

const LOG_FILE_NAME: &str = "eperf.log";

/// Route logs to a file when any candidate directory is writable; otherwise
/// run without logs rather than scribbling over the TUI via stdout/stderr.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match open_log_file() {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging to file");
        }
        None => {
            tracing_subscriber::registry().with(env_filter).init();
        }
    }
}

/// First log directory that can be created and written wins.
fn open_log_file() -> Option<(PathBuf, std::fs::File)> {
    log_dir_candidates().into_iter().flatten().find_map(|dir| {
        fs::create_dir_all(&dir).ok()?;
        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    })
}

/// `~/.eperf/logs` next to the config file, then `./.eperf/logs` for
/// environments without a resolvable home.
fn log_dir_candidates() -> [Option<PathBuf>; 2] {
    let beside_config = PerfConfig::path()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join("logs"));

    [beside_config, Some(PathBuf::from(".eperf").join("logs"))]
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored on drop, so the terminal
/// stays usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_fallback_is_always_last() {
        let candidates = log_dir_candidates();
        assert_eq!(
            candidates.last().unwrap().as_deref(),
            Some(Path::new(".eperf/logs"))
        );
    }

    #[test]
    fn all_log_dirs_end_in_logs() {
        for dir in log_dir_candidates().into_iter().flatten() {
            assert_eq!(dir.file_name().unwrap(), "logs");
        }
    }
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match PerfConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}; using defaults");
            None
        }
    };
    let options = UiOptions::from_config(config.as_ref());

    let mut app = App::new(options)?;
    let mut form = DemoForm::new(app.form_handle());

    let mut session = TerminalSession::new()?;
    run_app(&mut session.terminal, &mut app, &mut form).await
}

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App, form: &mut DemoForm) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        handle_events(app, form)?;

        app.tick();

        terminal.draw(|frame| draw(frame, app, form))?;

        if app.should_quit() {
            break Ok(());
        }
    }
}
