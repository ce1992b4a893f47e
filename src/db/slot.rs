//! Encoding of the persisted game slot.
//!
//! The slot is one JSON object, `{ "pairs": [...], "gameMode", "gridCols",
//! "gridRows" }`, overwritten as a whole on every save.

use crate::models::{
    DEFAULT_COLS, DEFAULT_ROWS, GameMode, MAX_DIMENSION, MIN_DIMENSION, Pair, Settings,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SLOT_KEY: &str = "flashcard_game_data_v4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub pairs: Vec<Pair>,
    pub settings: Settings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotOut<'a> {
    pairs: &'a [Pair],
    #[serde(flatten)]
    settings: &'a Settings,
}

// Every field is optional on the way in; older or hand-edited slots may lack
// the settings entirely.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotIn {
    pairs: Option<Vec<Pair>>,
    game_mode: Option<String>,
    grid_cols: Option<u32>,
    grid_rows: Option<u32>,
}

pub fn encode_slot(pairs: &[Pair], settings: &Settings) -> serde_json::Result<String> {
    serde_json::to_string(&SlotOut { pairs, settings })
}

/// Decodes a stored slot. Anything unreadable, and any slot without pairs,
/// counts as no saved game.
pub fn decode_slot(raw: &str) -> Option<SavedGame> {
    let slot: SlotIn = match serde_json::from_str(raw) {
        Ok(slot) => slot,
        Err(e) => {
            warn!("Ignoring malformed saved game: {}", e);
            return None;
        }
    };

    let pairs = slot.pairs.filter(|pairs| !pairs.is_empty())?;

    let settings = Settings {
        game_mode: slot
            .game_mode
            .as_deref()
            .map(GameMode::from_slot_name)
            .unwrap_or_default(),
        grid_cols: saved_dimension(slot.grid_cols, DEFAULT_COLS),
        grid_rows: saved_dimension(slot.grid_rows, DEFAULT_ROWS),
    };

    Some(SavedGame { pairs, settings })
}

// Zero or missing means unset; anything else is pulled into the range the
// size controls allow.
fn saved_dimension(value: Option<u32>, default: u32) -> u32 {
    match value {
        Some(0) | None => default,
        Some(v) => v.clamp(MIN_DIMENSION, MAX_DIMENSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairs() -> Vec<Pair> {
        vec![Pair::new("cat", "a small feline"), Pair::new("dog", "a canine")]
    }

    #[test]
    fn test_encode_uses_flat_camel_case_object() {
        let settings = Settings {
            game_mode: GameMode::MultipleChoice,
            grid_cols: 6,
            grid_rows: 2,
        };
        let raw = encode_slot(&sample_pairs(), &settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["gameMode"], "multipleChoice");
        assert_eq!(value["gridCols"], 6);
        assert_eq!(value["gridRows"], 2);
        assert_eq!(value["pairs"][0]["word"], "cat");
        assert_eq!(value["pairs"][1]["definition"], "a canine");
    }

    #[test]
    fn test_decode_encoded_slot() {
        let settings = Settings {
            game_mode: GameMode::Column,
            grid_cols: 4,
            grid_rows: 5,
        };
        let raw = encode_slot(&sample_pairs(), &settings).unwrap();
        let saved = decode_slot(&raw).unwrap();

        assert_eq!(saved.pairs, sample_pairs());
        assert_eq!(saved.settings, settings);
    }

    #[test]
    fn test_decode_fills_missing_settings() {
        let saved = decode_slot(r#"{"pairs":[{"word":"a","definition":"b"}]}"#).unwrap();
        assert_eq!(saved.settings, Settings::default());
    }

    #[test]
    fn test_decode_zero_dimensions_fall_back() {
        let raw = r#"{"pairs":[{"word":"a","definition":"b"}],"gridCols":0,"gridRows":6}"#;
        let saved = decode_slot(raw).unwrap();
        assert_eq!(saved.settings.grid_cols, DEFAULT_COLS);
        assert_eq!(saved.settings.grid_rows, 6);
    }

    #[test]
    fn test_decode_clamps_out_of_range_dimensions() {
        let raw = r#"{"pairs":[{"word":"a","definition":"b"}],"gameMode":"grid","gridCols":70000,"gridRows":1}"#;
        let saved = decode_slot(raw).unwrap();
        assert_eq!(saved.settings.grid_cols, MAX_DIMENSION);
        assert_eq!(saved.settings.grid_rows, MIN_DIMENSION);
    }

    #[test]
    fn test_decode_unknown_mode_is_grid() {
        let raw = r#"{"pairs":[{"word":"a","definition":"b"}],"gameMode":"memory"}"#;
        assert_eq!(decode_slot(raw).unwrap().settings.game_mode, GameMode::Grid);
    }

    #[test]
    fn test_decode_treats_bad_data_as_no_game() {
        assert!(decode_slot("not json").is_none());
        assert!(decode_slot("{}").is_none());
        assert!(decode_slot(r#"{"pairs":[]}"#).is_none());
        assert!(decode_slot(r#"{"pairs":"cat"}"#).is_none());
    }
}
