//! folio - Terminal Portfolio
//!
//! A terminal-based personal portfolio: profile header, five content
//! sections shown as modal overlays, and contact/appointment submissions
//! persisted to a hosted record store.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing_subscriber::EnvFilter;

mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::App;
use infrastructure::{HostedStore, StoreConfig, SubmissionOutcome, SubmissionWorker};
use presentation::{InputHandler, render_ui};

/// Entry point for the folio terminal portfolio.
///
/// Initializes file-based logging (the terminal itself runs in raw mode),
/// builds the record store and its submission worker, then runs the main
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails, the HTTP client cannot be
/// built, or the terminal interface fails during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file_appender = tracing_appender::rolling::never(".", "folio.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let store = HostedStore::new(StoreConfig::load())?;
    let (worker, outcomes) = SubmissionWorker::new(Arc::new(store));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app, &worker, &outcomes);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Each iteration renders the UI, lands any submission outcomes delivered by
/// the worker (stale ones are discarded by the state machine), and polls for
/// keyboard input with a timeout so the loop stays responsive while a
/// submission is in flight. Quits on 'q' from the home screen.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    worker: &SubmissionWorker,
    outcomes: &Receiver<SubmissionOutcome>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_submission_result(outcome.generation, outcome.result);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.active_section.is_none() => return Ok(()),
                        _ => InputHandler::handle_key_event(app, worker, key.code, key.modifiers),
                    }
                }
            }
        }
    }
}
