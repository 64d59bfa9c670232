use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tracing::{debug, info};

use cloudtui::api::CloudClient;
use cloudtui::config::{get_config_path, Config};
use cloudtui::controller::Controller;
use cloudtui::token_store::FileTokenStore;

/// Cloud storage TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to cloudtui-debug.log in the system temp dir
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, /)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the API base URL from the config file
    #[arg(long)]
    base_url: Option<String>,
}

mod handlers;
mod ui;
mod utils;

pub struct App {
    pub controller: Controller,
    /// Shown in the title bar
    pub base_url: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        let client = CloudClient::new(config.base_url.clone());
        let base_url = client.base_url().to_string();

        let token_path = config
            .token_path
            .clone()
            .unwrap_or_else(FileTokenStore::default_path);
        debug!(path = %token_path.display(), "Using token store");
        let store = FileTokenStore::new(token_path);

        let controller = Controller::new(Arc::new(client), Box::new(store))
            .with_debounce(config.search_debounce())
            .with_vim_mode(config.vim_mode);

        Self {
            controller,
            base_url,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.debug {
        let log_path = utils::init_logging()?;
        info!(path = %log_path.display(), "Debug mode enabled");
    }

    // Determine config file path
    let config_path = get_config_path(args.config)?;
    debug!("Loading config from: {:?}", config_path);

    // Load configuration
    let mut config = Config::load(&config_path)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    // Initialize app
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.controller.model.ui.should_dismiss_toast() {
            app.controller.model.ui.dismiss_toast();
        }

        if app.controller.model.ui.should_quit {
            break;
        }

        // Apply settled searches and finished listings (non-blocking)
        app.controller.process_pending_events();

        // Fetch whenever folder, view, search or refresh counter moved on
        app.controller.refresh_listing_if_stale();

        // Short poll so timer and fetch completions show up promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key).await?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_debug_help_names_temp_dir() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("in the system temp dir"));
        assert!(!help.contains("/tmp/"));
    }
}
