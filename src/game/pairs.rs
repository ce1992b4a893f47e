use std::time::Instant;
use tracing::debug;

use super::{Game, MISMATCH_CLEAR_DELAY, Transition};
use crate::models::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored,
    Selected,
    Deselected,
    Matched(usize),
    Mismatched,
}

impl Game {
    /// Selects the card with `unique_id` in grid or column mode.
    ///
    /// A second card of the other kind resolves the pair: equal ids match at
    /// once, different ids stay selected until the clear transition fires.
    pub fn select_card(&mut self, unique_id: &str, now: Instant) -> SelectOutcome {
        let Some(card) = self.find_card(unique_id) else {
            return SelectOutcome::Ignored;
        };

        if self.is_resolving() || self.is_matched(card.id) {
            return SelectOutcome::Ignored;
        }

        if self.is_selected(&card) {
            self.selected.retain(|s| s.unique_id != card.unique_id);
            return SelectOutcome::Deselected;
        }

        if let [only] = self.selected.as_slice() {
            if only.kind == card.kind {
                return SelectOutcome::Ignored;
            }
        }

        self.selected.push(card);
        if self.selected.len() < 2 {
            return SelectOutcome::Selected;
        }

        let (a, b) = (self.selected[0].id, self.selected[1].id);
        if a == b {
            self.matched.insert(a);
            self.selected.clear();
            debug!("Matched pair {} ({}/{})", a, self.matched.len(), self.pairs_in_play);
            self.check_pairs_complete(now);
            SelectOutcome::Matched(a)
        } else {
            debug!("Mismatch between pairs {} and {}", a, b);
            self.schedule(Transition::ClearSelection, now + MISMATCH_CLEAR_DELAY);
            SelectOutcome::Mismatched
        }
    }

    fn find_card(&self, unique_id: &str) -> Option<Card> {
        self.cards()
            .into_iter()
            .find(|c| c.unique_id == unique_id)
            .cloned()
    }

    fn check_pairs_complete(&mut self, now: Instant) {
        if self.settings.game_mode.is_pair_matching()
            && self.pairs_in_play > 0
            && self.matched.len() == self.pairs_in_play
        {
            self.finish(now);
        }
    }
}
