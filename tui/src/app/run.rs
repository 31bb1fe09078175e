use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use predictor::{config::ClientConfig, PredictSession, PredictionClient};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;

use crate::{
    state::session::FormState,
    ui::screens::{Action, Screen},
};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run() -> Result<()> {
    let runtime = Runtime::new()?;

    let config = ClientConfig::from_env();
    let client = PredictionClient::new(&config);
    log::info!("predicting against {}", config.base_url);

    let session = PredictSession::new(client, runtime.handle().clone());
    let mut screen = Screen::Form(FormState::new(session, config.base_url.clone()));

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        screen.tick();
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    drop(terminal);
    runtime.shutdown_background();
    Ok(())
}
