use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub const DEFAULT_COLS: u32 = 4;
pub const DEFAULT_ROWS: u32 = 4;
pub const MIN_DIMENSION: u32 = 2;
pub const MAX_DIMENSION: u32 = 10;

/// One word/definition flashcard unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub word: String,
    pub definition: String,
}

impl Pair {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Word,
    Definition,
}

/// A card on the board. `id` is the index of its pair within the round, so a
/// word card and its definition card share it; `unique_id` tells them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub kind: CardKind,
    pub content: String,
    pub unique_id: String,
}

impl Card {
    pub fn word(id: usize, pair: &Pair) -> Self {
        Self {
            id,
            kind: CardKind::Word,
            content: pair.word.clone(),
            unique_id: format!("card-{}-word", id),
        }
    }

    pub fn definition(id: usize, pair: &Pair) -> Self {
        Self {
            id,
            kind: CardKind::Definition,
            content: pair.definition.clone(),
            unique_id: format!("card-{}-def", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStatus {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizChoice {
    pub id: usize,
    pub content: String,
    pub is_correct: bool,
    pub status: Option<ChoiceStatus>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    Grid,
    Column,
    MultipleChoice,
}

impl GameMode {
    /// Mode names as stored in the persisted slot. Unknown names fall back to
    /// grid, the same as a missing mode.
    pub fn from_slot_name(name: &str) -> Self {
        match name {
            "column" => GameMode::Column,
            "multipleChoice" => GameMode::MultipleChoice,
            _ => GameMode::Grid,
        }
    }

    pub fn next(self) -> Self {
        match self {
            GameMode::Grid => GameMode::Column,
            GameMode::Column => GameMode::MultipleChoice,
            GameMode::MultipleChoice => GameMode::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Grid => "Grid Match",
            GameMode::Column => "Column Match",
            GameMode::MultipleChoice => "Multiple Choice",
        }
    }

    pub fn is_pair_matching(self) -> bool {
        !matches!(self, GameMode::MultipleChoice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub game_mode: GameMode,
    pub grid_cols: u32,
    pub grid_rows: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_mode: GameMode::Grid,
            grid_cols: DEFAULT_COLS,
            grid_rows: DEFAULT_ROWS,
        }
    }
}

impl Settings {
    pub fn with_mode(self, game_mode: GameMode) -> Self {
        Self { game_mode, ..self }
    }

    /// Column changes are always checked for an even card count.
    pub fn with_cols(self, grid_cols: u32) -> Result<Self, SettingsError> {
        if is_odd_card_count(grid_cols, self.grid_rows) {
            return Err(SettingsError::OddCardCount {
                cols: grid_cols,
                rows: self.grid_rows,
            });
        }
        Ok(Self { grid_cols, ..self })
    }

    /// Row changes only need an even card count when the grid uses them;
    /// column mode lays out one row per pair.
    pub fn with_rows(self, grid_rows: u32) -> Result<Self, SettingsError> {
        if self.game_mode == GameMode::Grid && is_odd_card_count(self.grid_cols, grid_rows) {
            return Err(SettingsError::OddCardCount {
                cols: self.grid_cols,
                rows: grid_rows,
            });
        }
        Ok(Self { grid_rows, ..self })
    }

    pub fn grid_capacity(&self) -> usize {
        self.grid_cols as usize * self.grid_rows as usize / 2
    }
}

fn is_odd_card_count(cols: u32, rows: u32) -> bool {
    cols % 2 == 1 && rows % 2 == 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Play,
    DeckEditor,
    Alert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_unique_ids() {
        let pair = Pair::new("cat", "a small feline");
        let word = Card::word(3, &pair);
        let def = Card::definition(3, &pair);

        assert_eq!(word.id, def.id);
        assert_eq!(word.unique_id, "card-3-word");
        assert_eq!(def.unique_id, "card-3-def");
        assert_eq!(word.content, "cat");
        assert_eq!(def.content, "a small feline");
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(GameMode::Grid.next(), GameMode::Column);
        assert_eq!(GameMode::Column.next(), GameMode::MultipleChoice);
        assert_eq!(GameMode::MultipleChoice.next(), GameMode::Grid);
    }

    #[test]
    fn test_mode_from_slot_name() {
        assert_eq!(GameMode::from_slot_name("column"), GameMode::Column);
        assert_eq!(
            GameMode::from_slot_name("multipleChoice"),
            GameMode::MultipleChoice
        );
        assert_eq!(GameMode::from_slot_name("grid"), GameMode::Grid);
        assert_eq!(GameMode::from_slot_name("bogus"), GameMode::Grid);
    }

    #[test]
    fn test_with_cols_rejects_odd_product() {
        let settings = Settings {
            game_mode: GameMode::Grid,
            grid_cols: 4,
            grid_rows: 3,
        };
        assert!(settings.with_cols(3).is_err());
        assert_eq!(settings.with_cols(2).unwrap().grid_cols, 2);
    }

    #[test]
    fn test_with_rows_only_checked_in_grid_mode() {
        let grid = Settings {
            game_mode: GameMode::Grid,
            grid_cols: 3,
            grid_rows: 4,
        };
        assert!(grid.with_rows(3).is_err());

        let column = grid.with_mode(GameMode::Column);
        assert_eq!(column.with_rows(3).unwrap().grid_rows, 3);
    }

    #[test]
    fn test_grid_capacity() {
        assert_eq!(Settings::default().grid_capacity(), 8);
        let small = Settings {
            game_mode: GameMode::Grid,
            grid_cols: 2,
            grid_rows: 3,
        };
        assert_eq!(small.grid_capacity(), 3);
    }

    #[test]
    fn test_huge_dimensions_do_not_overflow() {
        let huge = Settings {
            game_mode: GameMode::Grid,
            grid_cols: 70_000,
            grid_rows: 70_000,
        };
        assert_eq!(huge.grid_capacity(), 2_450_000_000);
        assert!(huge.with_cols(u32::MAX).is_ok());
        assert!(huge.with_rows(u32::MAX).is_ok());
        assert!(huge.with_cols(u32::MAX).unwrap().with_rows(u32::MAX).is_err());
    }
}
