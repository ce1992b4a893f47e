use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use flashcard_match::{
    App, Cli, Game, Settings,
    db::{DeckStore, MemoryStore, SqliteStore},
    deck::load_deck_file,
    handle_key, logger, ui,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(100);

fn open_store(cli: &Cli) -> Box<dyn DeckStore> {
    let path = cli.db_path();
    match SqliteStore::open(&path) {
        Ok(store) => {
            info!("Using deck database at {}", path.display());
            Box::new(store)
        }
        Err(e) => {
            warn!(
                "Could not open {}: {}. Progress will not be kept.",
                path.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn prepare_app(cli: &Cli, now: Instant) -> Result<App> {
    let mut app = App::new(open_store(cli), Game::new(Settings::default()));
    app.load(now);

    if let Some(path) = &cli.import {
        let pairs = load_deck_file(path)
            .with_context(|| format!("Failed to read deck from {}", path.display()))?;
        info!("Imported {} pairs from {}", pairs.len(), path.display());
        app.replace_deck(pairs, now);
    }
    if let Some(mode) = cli.mode {
        app.change_mode(mode, now);
    }
    if let Some(cols) = cli.cols {
        app.change_cols(cols, now)?;
    }
    if let Some(rows) = cli.rows {
        app.change_rows(rows, now)?;
    }

    Ok(app)
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app, Instant::now()))?;

        // Wake up for the next pending transition, or often enough to keep the clock moving.
        let now = Instant::now();
        let timeout = app
            .game
            .next_deadline()
            .map(|due| due.saturating_duration_since(now).min(FRAME_INTERVAL))
            .unwrap_or(FRAME_INTERVAL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, Instant::now());
                }
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(&cli.log_path())
        .with_context(|| format!("Failed to open log file {}", cli.log_path().display()))?;
    info!("Starting flashcard-match");

    let mut app = prepare_app(&cli, Instant::now())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        warn!("Exited with error: {:#}", e);
    }
    info!("Shutting down");
    result
}
