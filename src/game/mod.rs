//! Round state for the three play modes.
//!
//! [`Game::initialize`] deals a fresh round from the deck; the selection
//! methods in `pairs` and `quiz` advance it. Delayed follow-ups (clearing a
//! failed pair, moving to the next quiz word) are queued as [`Scheduled`]
//! transitions tagged with the round generation and applied by [`Game::tick`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::models::{Card, GameMode, Pair, QuizChoice, Settings};

mod pairs;
mod quiz;

pub use pairs::SelectOutcome;
pub use quiz::{ChoiceOutcome, QuizState};

pub const MISMATCH_CLEAR_DELAY: Duration = Duration::from_millis(700);
pub const QUIZ_ADVANCE_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
    Empty,
    Grid { cards: Vec<Card> },
    Column { words: Vec<Card>, definitions: Vec<Card> },
    Quiz(QuizState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ClearSelection,
    AdvanceQuiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub due: Instant,
    pub generation: u64,
    pub transition: Transition,
}

pub struct Game {
    settings: Settings,
    rng: StdRng,
    generation: u64,
    board: Board,
    pairs_in_play: usize,
    matched: HashSet<usize>,
    selected: Vec<Card>,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    pending: Vec<Scheduled>,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    pub fn with_rng(settings: Settings, rng: StdRng) -> Self {
        Self {
            settings,
            rng,
            generation: 0,
            board: Board::Empty,
            pairs_in_play: 0,
            matched: HashSet::new(),
            selected: Vec::new(),
            started_at: None,
            ended_at: None,
            pending: Vec::new(),
        }
    }

    /// Deals a new round for the current settings. Returns `false` and leaves
    /// the game untouched when the deck is empty.
    pub fn initialize(&mut self, deck: &[Pair], now: Instant) -> bool {
        if deck.is_empty() {
            return false;
        }

        self.generation += 1;
        self.matched.clear();
        self.selected.clear();
        self.started_at = Some(now);
        self.ended_at = None;

        match self.settings.game_mode {
            GameMode::MultipleChoice => {
                let mut quiz_deck = deck.to_vec();
                quiz_deck.shuffle(&mut self.rng);
                self.pairs_in_play = quiz_deck.len();
                let mut state = QuizState::new(quiz_deck, deck.to_vec());
                state.setup_round(0, &mut self.rng);
                self.board = Board::Quiz(state);
            }
            GameMode::Column => {
                let in_play = self.sample_pairs(deck, self.settings.grid_rows as usize);
                let words = in_play
                    .iter()
                    .enumerate()
                    .map(|(i, p)| Card::word(i, p))
                    .collect();
                let mut definitions: Vec<Card> = in_play
                    .iter()
                    .enumerate()
                    .map(|(i, p)| Card::definition(i, p))
                    .collect();
                definitions.shuffle(&mut self.rng);
                self.board = Board::Column { words, definitions };
            }
            GameMode::Grid => {
                let in_play = self.sample_pairs(deck, self.settings.grid_capacity());
                let mut cards: Vec<Card> = in_play
                    .iter()
                    .enumerate()
                    .flat_map(|(i, p)| [Card::word(i, p), Card::definition(i, p)])
                    .collect();
                cards.shuffle(&mut self.rng);
                self.board = Board::Grid { cards };
            }
        }

        info!(
            "Started {:?} round {} with {} pairs in play",
            self.settings.game_mode, self.generation, self.pairs_in_play
        );
        true
    }

    /// Drops the current round, leaving nothing to play. Pending transitions
    /// become stale.
    pub fn clear(&mut self) {
        if self.board == Board::Empty {
            return;
        }
        self.generation += 1;
        self.board = Board::Empty;
        self.pairs_in_play = 0;
        self.matched.clear();
        self.selected.clear();
        self.started_at = None;
        self.ended_at = None;
        info!("Cleared round, deck is empty");
    }

    /// Shuffles the deck and keeps the first `limit` pairs.
    fn sample_pairs(&mut self, deck: &[Pair], limit: usize) -> Vec<Pair> {
        let count = limit.min(deck.len());
        self.pairs_in_play = count;
        let mut shuffled = deck.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled.truncate(count);
        shuffled
    }

    fn schedule(&mut self, transition: Transition, due: Instant) {
        self.pending.push(Scheduled {
            due,
            generation: self.generation,
            transition,
        });
    }

    /// Applies every scheduled transition due at `now`. Transitions issued
    /// against an earlier round are dropped. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = waiting;

        let mut changed = false;
        for scheduled in due {
            if scheduled.generation != self.generation {
                debug!(
                    "Dropping stale {:?} from round {}",
                    scheduled.transition, scheduled.generation
                );
                continue;
            }
            match scheduled.transition {
                Transition::ClearSelection => {
                    self.selected.clear();
                }
                Transition::AdvanceQuiz => self.advance_quiz(now),
            }
            changed = true;
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    fn finish(&mut self, now: Instant) {
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
            info!(
                "Round {} completed: {} / {}",
                self.generation,
                self.score(),
                self.pairs_in_play
            );
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Replaces the settings. The caller deals a new round afterwards.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pairs_in_play(&self) -> usize {
        self.pairs_in_play
    }

    pub fn is_matched(&self, id: usize) -> bool {
        self.matched.contains(&id)
    }

    pub fn is_selected(&self, card: &Card) -> bool {
        self.selected.iter().any(|s| s.unique_id == card.unique_id)
    }

    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    /// Two cards held after a failed match, waiting to be cleared.
    pub fn is_resolving(&self) -> bool {
        self.selected.len() >= 2
    }

    /// Matched pairs in the pair modes, solved words in the quiz.
    pub fn score(&self) -> usize {
        match &self.board {
            Board::Quiz(quiz) => quiz.solved.len(),
            _ => self.matched.len(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Time since the round started, frozen once it completes.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(start) => self.ended_at.unwrap_or(now).saturating_duration_since(start),
            None => Duration::ZERO,
        }
    }

    pub fn quiz(&self) -> Option<&QuizState> {
        match &self.board {
            Board::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn quiz_choices(&self) -> &[QuizChoice] {
        self.quiz().map(|q| q.choices.as_slice()).unwrap_or(&[])
    }

    /// Cards in focus order: grid order, or the word column then the
    /// definition column.
    pub fn cards(&self) -> Vec<&Card> {
        match &self.board {
            Board::Grid { cards } => cards.iter().collect(),
            Board::Column { words, definitions } => words.iter().chain(definitions).collect(),
            _ => Vec::new(),
        }
    }
}
