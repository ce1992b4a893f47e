use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not encode saved game: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not prepare data directory: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("The total number of cards (Columns x Rows) must be an even number.")]
    OddCardCount { cols: u32, rows: u32 },
}
