use std::time::Instant;
use tracing::{info, warn};

use crate::db::DeckStore;
use crate::deck::{format_deck_text, parse_deck_text};
use crate::editor::DeckEditor;
use crate::error::SettingsError;
use crate::game::{Board, ChoiceOutcome, Game, SelectOutcome};
use crate::models::{AppState, GameMode, MAX_DIMENSION, MIN_DIMENSION, Pair, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Up,
    Down,
    Left,
    Right,
}

/// Everything the view needs: the deck, the running game, and the popups on
/// top of it.
pub struct App {
    store: Box<dyn DeckStore>,
    pub pairs: Vec<Pair>,
    pub game: Game,
    pub state: AppState,
    pub focus: usize,
    pub editor: DeckEditor,
    pub alert: Option<String>,
    pub saved_at: Option<i64>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Box<dyn DeckStore>, game: Game) -> Self {
        Self {
            store,
            pairs: Vec::new(),
            game,
            state: AppState::Play,
            focus: 0,
            editor: DeckEditor::default(),
            alert: None,
            saved_at: None,
            should_quit: false,
        }
    }

    /// Restores the saved deck and settings and deals a round. A missing or
    /// unreadable slot leaves the deck empty.
    pub fn load(&mut self, now: Instant) {
        match self.store.load() {
            Ok(Some(saved)) => {
                info!("Loaded saved deck with {} pairs", saved.pairs.len());
                self.pairs = saved.pairs;
                self.game.set_settings(saved.settings);
                self.restart(now);
            }
            Ok(None) => info!("No saved deck"),
            Err(e) => warn!("Could not read saved deck: {}", e),
        }
    }

    /// Deals a new round from the current deck and settings and persists both.
    /// An empty deck clears the board instead.
    pub fn restart(&mut self, now: Instant) {
        self.focus = 0;
        if !self.game.initialize(&self.pairs, now) {
            self.game.clear();
            return;
        }
        self.persist();
    }

    fn persist(&mut self) {
        let settings = self.game.settings();
        if let Err(e) = self.store.save(&self.pairs, &settings) {
            warn!("Could not save deck: {}", e);
            return;
        }
        match self.store.saved_at() {
            Ok(ts) => self.saved_at = ts,
            Err(e) => warn!("Could not read save time: {}", e),
        }
    }

    pub fn settings(&self) -> Settings {
        self.game.settings()
    }

    pub fn change_mode(&mut self, mode: GameMode, now: Instant) {
        self.game.set_settings(self.settings().with_mode(mode));
        self.restart(now);
    }

    pub fn cycle_mode(&mut self, now: Instant) {
        let next = self.settings().game_mode.next();
        self.change_mode(next, now);
    }

    pub fn change_cols(&mut self, cols: u32, now: Instant) -> Result<(), SettingsError> {
        let settings = self.settings().with_cols(clamp_dimension(cols))?;
        self.game.set_settings(settings);
        self.restart(now);
        Ok(())
    }

    pub fn change_rows(&mut self, rows: u32, now: Instant) -> Result<(), SettingsError> {
        let settings = self.settings().with_rows(clamp_dimension(rows))?;
        self.game.set_settings(settings);
        self.restart(now);
        Ok(())
    }

    /// Steps a grid dimension by `delta`, raising the alert when the new size
    /// is rejected. Columns only exist in grid mode, rows in both pair modes.
    pub fn step_cols(&mut self, delta: i32, now: Instant) {
        if self.settings().game_mode != GameMode::Grid {
            return;
        }
        let cols = self.settings().grid_cols.saturating_add_signed(delta);
        if let Err(e) = self.change_cols(cols, now) {
            self.show_alert(e.to_string());
        }
    }

    pub fn step_rows(&mut self, delta: i32, now: Instant) {
        if !self.settings().game_mode.is_pair_matching() {
            return;
        }
        let rows = self.settings().grid_rows.saturating_add_signed(delta);
        if let Err(e) = self.change_rows(rows, now) {
            self.show_alert(e.to_string());
        }
    }

    pub fn show_alert(&mut self, message: String) {
        warn!("Rejected settings change: {}", message);
        self.alert = Some(message);
        self.state = AppState::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.state = AppState::Play;
    }

    pub fn open_editor(&mut self) {
        self.editor = DeckEditor::open(format_deck_text(&self.pairs));
        self.state = AppState::DeckEditor;
    }

    pub fn close_editor(&mut self) {
        self.state = AppState::Play;
    }

    /// Replaces the deck with the editor contents and deals a new round.
    pub fn save_deck(&mut self, now: Instant) {
        let pairs = parse_deck_text(&self.editor.text);
        self.replace_deck(pairs, now);
        self.state = AppState::Play;
    }

    pub fn replace_deck(&mut self, pairs: Vec<Pair>, now: Instant) {
        info!("Deck replaced with {} pairs", pairs.len());
        self.pairs = pairs;
        self.restart(now);
    }

    /// Number of focusable items on the current board.
    pub fn focus_len(&self) -> usize {
        match self.game.board() {
            Board::Quiz(_) => self.game.quiz_choices().len(),
            _ => self.game.cards().len(),
        }
    }

    pub fn move_focus(&mut self, direction: FocusMove) {
        let len = self.focus_len();
        if len == 0 {
            self.focus = 0;
            return;
        }

        let focus = self.focus.min(len - 1);
        self.focus = match self.game.board() {
            Board::Grid { .. } => {
                let cols = self.settings().grid_cols.max(1) as usize;
                step_grid(focus, len, cols, direction)
            }
            Board::Column { words, .. } => step_columns(focus, words.len(), len, direction),
            Board::Quiz(_) => step_grid(focus, len, 2, direction),
            Board::Empty => 0,
        };
    }

    /// Selects whatever has focus: a card in the pair modes, a choice in the
    /// quiz.
    pub fn select_focused(&mut self, now: Instant) {
        if matches!(self.game.board(), Board::Quiz(_)) {
            let id = self.game.quiz_choices().get(self.focus).map(|c| c.id);
            if let Some(id) = id {
                self.select_choice(id, now);
            }
            return;
        }

        let unique_id = self
            .game
            .cards()
            .get(self.focus)
            .map(|card| card.unique_id.clone());
        if let Some(unique_id) = unique_id {
            self.select_card(&unique_id, now);
        }
    }

    pub fn select_card(&mut self, unique_id: &str, now: Instant) -> SelectOutcome {
        self.game.select_card(unique_id, now)
    }

    pub fn select_choice(&mut self, id: usize, now: Instant) -> ChoiceOutcome {
        self.game.select_choice(id, now)
    }

    /// Runs due transitions. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.game.tick(now);
        if changed {
            let len = self.focus_len();
            if self.focus >= len {
                self.focus = len.saturating_sub(1);
            }
        }
        changed
    }
}

fn clamp_dimension(value: u32) -> u32 {
    value.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

fn step_grid(focus: usize, len: usize, cols: usize, direction: FocusMove) -> usize {
    match direction {
        FocusMove::Left => focus.saturating_sub(1),
        FocusMove::Right => (focus + 1).min(len - 1),
        FocusMove::Up => focus.checked_sub(cols).unwrap_or(focus),
        FocusMove::Down => {
            if focus + cols < len {
                focus + cols
            } else {
                focus
            }
        }
    }
}

// Word column occupies [0, split), definitions [split, len).
fn step_columns(focus: usize, split: usize, len: usize, direction: FocusMove) -> usize {
    let in_words = focus < split;
    let (start, end) = if in_words { (0, split) } else { (split, len) };
    match direction {
        FocusMove::Up => focus.saturating_sub(1).max(start),
        FocusMove::Down => (focus + 1).min(end - 1),
        FocusMove::Left if !in_words => (focus - split).min(split.saturating_sub(1)),
        FocusMove::Right if in_words && len > split => (split + focus).min(len - 1),
        _ => focus,
    }
}
