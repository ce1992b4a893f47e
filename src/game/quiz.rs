use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;
use tracing::debug;

use super::{Board, Game, QUIZ_ADVANCE_DELAY, Transition};
use crate::models::{ChoiceStatus, Pair, QuizChoice};

const DISTRACTORS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    /// Shuffled words, one per round.
    pub deck: Vec<Pair>,
    /// The full deck, where distractor definitions come from.
    pub pool: Vec<Pair>,
    pub index: usize,
    pub current: Option<Pair>,
    pub choices: Vec<QuizChoice>,
    pub locked: bool,
    pub solved: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Ignored,
    Correct,
    Incorrect,
}

impl QuizState {
    pub fn new(deck: Vec<Pair>, pool: Vec<Pair>) -> Self {
        Self {
            deck,
            pool,
            index: 0,
            current: None,
            choices: Vec::new(),
            locked: false,
            solved: Vec::new(),
        }
    }

    /// Prepares round `index`. Returns `false` when the deck is used up.
    pub fn setup_round<R: Rng>(&mut self, index: usize, rng: &mut R) -> bool {
        self.index = index;
        self.locked = false;

        let Some(correct) = self.deck.get(index).cloned() else {
            self.current = None;
            self.choices.clear();
            return false;
        };

        let others: Vec<&Pair> = self.pool.iter().filter(|p| p.word != correct.word).collect();
        let mut options: Vec<(&str, bool)> = others
            .choose_multiple(rng, DISTRACTORS)
            .map(|p| (p.definition.as_str(), false))
            .collect();
        options.push((correct.definition.as_str(), true));
        options.shuffle(rng);

        self.choices = options
            .into_iter()
            .enumerate()
            .map(|(id, (content, is_correct))| QuizChoice {
                id,
                content: content.to_string(),
                is_correct,
                status: None,
            })
            .collect();
        self.current = Some(correct);
        true
    }

    pub fn rounds_left(&self) -> usize {
        self.deck.len().saturating_sub(self.index)
    }
}

impl Game {
    /// Answers the current quiz round. The first answer locks the round and
    /// schedules the move to the next word.
    pub fn select_choice(&mut self, choice_id: usize, now: Instant) -> ChoiceOutcome {
        let Board::Quiz(quiz) = &mut self.board else {
            return ChoiceOutcome::Ignored;
        };
        if quiz.locked || quiz.current.is_none() {
            return ChoiceOutcome::Ignored;
        }
        let Some(choice) = quiz.choices.iter_mut().find(|c| c.id == choice_id) else {
            return ChoiceOutcome::Ignored;
        };

        quiz.locked = true;
        let outcome = if choice.is_correct {
            choice.status = Some(ChoiceStatus::Correct);
            if let Some(current) = &quiz.current {
                quiz.solved.push(current.word.clone());
            }
            ChoiceOutcome::Correct
        } else {
            choice.status = Some(ChoiceStatus::Incorrect);
            ChoiceOutcome::Incorrect
        };
        debug!("Quiz round {} answered: {:?}", quiz.index, outcome);

        self.schedule(Transition::AdvanceQuiz, now + QUIZ_ADVANCE_DELAY);
        outcome
    }

    pub(super) fn advance_quiz(&mut self, now: Instant) {
        let Board::Quiz(quiz) = &mut self.board else {
            return;
        };
        let next = quiz.index + 1;
        if !quiz.setup_round(next, &mut self.rng) {
            self.finish(now);
        }
    }
}
