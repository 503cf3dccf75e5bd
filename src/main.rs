//! Portfolio TUI - terminal rendition of Sheikh Azwad Abrar's portfolio
//!
//! Browse the portfolio sections and past works, and send the owner a
//! message through the EmailJS relay without leaving the terminal.

mod app;
mod config;
mod contact;
mod content;
mod platform;
mod relay;
mod state;
mod supervisor;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use config::PortfolioConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::Route;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use supervisor::Supervisor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "portfolio-tui", version, about)]
struct Args {
    /// Page to open, e.g. "/works/academic" or "/#contact"
    #[arg(long)]
    path: Option<String>,

    /// Skip the intro animation
    #[arg(long)]
    no_splash: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file
    init_logging();
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "Panic");
    }));

    let config = PortfolioConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_env();
    let show_splash = config.show_splash() && !args.no_splash;
    let route = args.path.as_deref().map(Route::parse).unwrap_or_default();
    tracing::info!(path = %route, "Starting portfolio");

    let mut supervisor = Supervisor::from_config(config, route, show_splash);

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, &mut supervisor);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "Exiting with error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Raw mode and the alternate screen for as long as this lives.
///
/// Restoring on drop also covers a panic unwinding out of the event loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            tracing::warn!(error = %e, "Failed to leave the alternate screen");
        }
    }
}

fn open_log_file() -> Option<File> {
    let path = PortfolioConfig::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "portfolio_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init(),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    supervisor: &mut Supervisor,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        supervisor.set_terminal_size(size.height, size.width);

        supervisor.tick();
        terminal.draw(|frame| supervisor.render(frame))?;

        if supervisor.should_quit() {
            return Ok(());
        }

        // ~60fps while something is moving
        let poll_duration = if supervisor.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    supervisor.handle_key(key);
                }
                Event::Mouse(mouse) => supervisor.handle_mouse(mouse),
                _ => {}
            }
        }

        if supervisor.should_quit() {
            return Ok(());
        }
    }
}
