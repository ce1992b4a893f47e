pub mod app;
pub mod config;
pub mod db;
pub mod deck;
pub mod editor;
pub mod error;
pub mod game;
pub mod input;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::{App, FocusMove};
pub use config::Cli;
pub use db::{DeckStore, MemoryStore, SavedGame, SqliteStore};
pub use deck::{format_deck_text, load_deck_file, parse_deck_line, parse_deck_text};
pub use error::{SettingsError, StoreError};
pub use game::{Board, ChoiceOutcome, Game, SelectOutcome};
pub use input::handle_key;
pub use models::{AppState, Card, CardKind, GameMode, Pair, QuizChoice, Settings};
