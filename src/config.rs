use clap::Parser;
use std::path::PathBuf;

use crate::logger::DEFAULT_LOG_FILE;
use crate::models::GameMode;

pub const DB_FILE: &str = "fm.db";
const APP_DIR: &str = "flashcard-match";

#[derive(Debug, Parser)]
#[command(name = "flashcard-match")]
#[command(about = "Match words to their definitions in the terminal", long_about = None)]
pub struct Cli {
    /// Directory for the saved deck and the log (default: ~/.local/share/flashcard-match)
    #[arg(long, value_name = "DIR", env = "FLASHCARD_MATCH_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Database file, overrides --data-dir for the saved deck
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Replace the deck with the `word,definition` lines of this file
    #[arg(long, value_name = "CSV")]
    pub import: Option<PathBuf>,

    /// Start in this mode instead of the saved one
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// Grid columns
    #[arg(long)]
    pub cols: Option<u32>,

    /// Grid rows (pairs per column in column mode)
    #[arg(long)]
    pub rows: Option<u32>,

    /// Log file (default: <data dir>/flashcard_match.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn db_path(&self) -> PathBuf {
        self.db.clone().unwrap_or_else(|| self.data_dir().join(DB_FILE))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join(DEFAULT_LOG_FILE))
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
