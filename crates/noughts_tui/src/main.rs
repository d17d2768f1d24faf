//! Terminal UI for noughts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use noughts_i18n::{LocaleStrings, StringCatalog};

/// Terminal tic-tac-toe: board, move history with jump navigation, and
/// localized text.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
struct Cli {
    /// Locale to start in
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Directory of additional locale .toml files
    #[arg(long)]
    locale_dir: Option<PathBuf>,
}

/// Loads the embedded locales plus any `.toml` tables found in
/// `locale_dir`, keyed by file stem. On-disk tables override embedded
/// ones with the same tag.
fn load_catalog(locale_dir: Option<&Path>) -> Result<StringCatalog> {
    let mut catalog = StringCatalog::new();
    catalog.add_locale(
        "en",
        LocaleStrings::from_toml_str(include_str!("../locales/en.toml"))
            .context("embedded en locale")?,
    );
    catalog.add_locale(
        "fr",
        LocaleStrings::from_toml_str(include_str!("../locales/fr.toml"))
            .context("embedded fr locale")?,
    );

    if let Some(dir) = locale_dir {
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("reading locale dir {}", dir.display()))?
        {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }
            let Some(tag) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let src = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let strings = LocaleStrings::from_toml_str(&src)
                .with_context(|| format!("parsing {}", path.display()))?;
            catalog.add_locale(tag.to_string(), strings);
        }
    }

    Ok(catalog)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(locale = %cli.locale, "Starting noughts TUI");

    let catalog = load_catalog(cli.locale_dir.as_deref())?;
    let mut app = App::new(catalog, cli.locale);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Synchronous event loop: draw, poll, dispatch. Every state transition
/// happens here in direct response to a single input event.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    code => app.on_key(code),
                }
            }
        }
    }
}
