mod app;
mod loader;
mod theme;
mod ui;
mod views;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use loader::Source;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "chronicle", about = "Browse a milestone timeline in the terminal")]
struct Cli {
    /// Data source: a JSON file path or an http(s) URL holding an array
    /// of timeline items
    #[arg(default_value = "timeline.json")]
    source: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = Source::parse(&cli.source);

    // The single suspension point: the item list is loaded (or replaced
    // by the fallback) before the terminal is touched.
    let rt = tokio::runtime::Runtime::new()?;
    let (items, used_fallback) = rt.block_on(loader::load(&source));

    let mut app = App::new(items, source.label(), used_fallback);

    // Terminal setup
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if app.handle_key(key.code) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    if app.handle_mouse(mouse) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}
