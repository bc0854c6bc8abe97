//! folio-tui - terminal portfolio
//!
//! Hero, skills, experience and a responsive project gallery, with a
//! contact form that delivers through a mail relay.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::storage::config::Config;
use ratatui::backend::CrosstermBackend;
use std::fs::File;
use std::io::{self, stdout};

mod action;
mod app;
mod components;
mod error;
mod event;
mod layout;

use app::App;
use error::TuiResult;

const LOG_FILE_NAME: &str = "folio-tui.log";

/// Log to a file in the config directory; the terminal belongs to the UI.
/// `RUST_LOG` sets the filter, default `info`.
fn init_logging() {
    let Ok(dir) = Config::config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE_NAME)) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

#[tokio::main]
async fn main() -> TuiResult<()> {
    init_logging();

    // Load everything before touching the terminal so errors print normally
    let mut app = match App::from_config() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Set panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    log::info!("Starting folio-tui");
    let result = app.run_async(&mut terminal).await;

    // Cleanup terminal
    restore_terminal()?;

    if let Err(ref err) = result {
        log::error!("Application error: {}", err);
        eprintln!("Application error: {}", err);
    }

    result
}

/// Restore terminal to normal state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
