//! Terminal setup and the main UI loop

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app_component::AppComponent;
use super::core::{Component, EventHandler};
use crate::config::Config;
use crate::logger::Logger;
use crate::session::{create_identity_provider, UserSession};

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let provider = create_identity_provider(&config.identity.provider, &config.identity.credentials)
        .context("Failed to create identity provider")?;
    let session = UserSession::new(provider);
    let mouse_enabled = config.ui.mouse_enabled;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(session, config, logger.clone());
    app.restore_session().await;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;
    logger.flush();

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut AppComponent) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;

        let event = events.next_event().await?;
        app.handle_event(event).await?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
