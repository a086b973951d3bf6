use std::collections::VecDeque;

use rand::Rng;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        Card,
        KarteiError,
        Status,
    },
    deck::Deck,
    progress::StatusStore,
    session::builder::build_queue,
};

/// Where the controller is within the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Front shown, answer hidden.
    Question,
    /// Answer revealed, awaiting judgment.
    Answer,
    /// No cards left in the unit this round.
    Empty,
}

/// What happens to a card judged wrong, within the current queue instance.
/// Either way the card is saved as retry and returns on the next rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// The card leaves this queue and only comes back on the next rebuild.
    #[default]
    NextSession,
    /// The card moves to the back of the current queue.
    Requeue,
}

/// Which side of the pair is asked first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    SourceFirst,
    TargetFirst,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::SourceFirst => Direction::TargetFirst,
            Direction::TargetFirst => Direction::SourceFirst,
        }
    }
}

/// The active run through one unit. Never persisted; reconstructible at any
/// time from the deck and the status store.
#[derive(Debug)]
struct Session {
    unit: String,
    queue: VecDeque<Card>,
    phase: Phase,
}

impl Session {
    fn build<R: Rng + ?Sized>(
        deck: &Deck,
        unit: &str,
        store: &dyn StatusStore,
        rng: &mut R,
    ) -> Self {
        let queue = build_queue(deck.cards(), unit, store, rng);
        let phase = if queue.is_empty() { Phase::Empty } else { Phase::Question };

        Self { unit: unit.to_string(), queue, phase }
    }
}

/// State machine driving reveal/judge/advance for the current card. Owns the
/// session value; handlers mutate it through `&mut self`, never through
/// shared globals.
pub struct SessionController {
    session: Session,
    retry_policy: RetryPolicy,
    direction: Direction,
}

impl SessionController {
    pub fn new<R: Rng + ?Sized>(
        deck: &Deck,
        unit: &str,
        store: &dyn StatusStore,
        retry_policy: RetryPolicy,
        direction: Direction,
        rng: &mut R,
    ) -> Self {
        Self { session: Session::build(deck, unit, store, rng), retry_policy, direction }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn unit(&self) -> &str {
        &self.session.unit
    }

    pub fn remaining(&self) -> usize {
        self.session.queue.len()
    }

    pub fn current(&self) -> Option<&Card> {
        self.session.queue.front()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    pub fn set_retry_policy(&mut self, retry_policy: RetryPolicy) {
        self.retry_policy = retry_policy;
    }

    /// The question side of the current card.
    pub fn front_text(&self) -> Option<&str> {
        self.current().map(|card| match self.direction {
            Direction::SourceFirst => card.source(),
            Direction::TargetFirst => card.target(),
        })
    }

    /// The answer side of the current card; only available once revealed.
    pub fn back_text(&self) -> Option<&str> {
        if self.session.phase != Phase::Answer {
            return None;
        }

        self.current().map(|card| match self.direction {
            Direction::SourceFirst => card.target(),
            Direction::TargetFirst => card.source(),
        })
    }

    /// What the card panel should show right now: the answer once revealed,
    /// the question otherwise.
    pub fn display_text(&self) -> Option<&str> {
        match self.session.phase {
            Phase::Answer => self.back_text(),
            _ => self.front_text(),
        }
    }

    pub fn hint_text(&self) -> &'static str {
        match self.session.phase {
            Phase::Question => "Press Show to reveal the answer",
            Phase::Answer => "Right or wrong?",
            Phase::Empty => "",
        }
    }

    pub fn can_reveal(&self) -> bool {
        self.session.phase == Phase::Question
    }

    pub fn can_judge(&self) -> bool {
        self.session.phase == Phase::Answer
    }

    /// Question -> Answer. Idempotent: revealing again, or revealing with no
    /// card, changes nothing.
    pub fn reveal(&mut self) {
        if self.session.phase == Phase::Question {
            self.session.phase = Phase::Answer;
        }
    }

    /// Marks the current card done and advances. Outside Answer this is a
    /// no-op.
    pub fn mark_correct(&mut self, store: &mut dyn StatusStore) -> Result<(), KarteiError> {
        if self.session.phase != Phase::Answer {
            return Ok(());
        }

        let Some(card) = self.session.queue.pop_front() else {
            self.session.phase = Phase::Empty;
            return Ok(());
        };

        let saved = store.set(card.id(), Status::Done);
        self.advance();
        saved
    }

    /// Marks the current card retry and advances per the retry policy.
    pub fn mark_incorrect(&mut self, store: &mut dyn StatusStore) -> Result<(), KarteiError> {
        if self.session.phase != Phase::Answer {
            return Ok(());
        }

        let Some(card) = self.session.queue.pop_front() else {
            self.session.phase = Phase::Empty;
            return Ok(());
        };

        let saved = store.set(card.id(), Status::Retry);
        if self.retry_policy == RetryPolicy::Requeue {
            self.session.queue.push_back(card);
        }
        self.advance();
        saved
    }

    /// Rebuilds the session for another unit, discarding any in-flight
    /// Answer state.
    pub fn change_unit<R: Rng + ?Sized>(
        &mut self,
        deck: &Deck,
        unit: &str,
        store: &dyn StatusStore,
        rng: &mut R,
    ) {
        self.session = Session::build(deck, unit, store, rng);
    }

    /// Rebuilds the current unit from scratch (fresh filter and shuffle).
    pub fn rebuild<R: Rng + ?Sized>(&mut self, deck: &Deck, store: &dyn StatusStore, rng: &mut R) {
        let unit = self.session.unit.clone();
        self.session = Session::build(deck, &unit, store, rng);
    }

    /// Clears all saved status, then rebuilds. Empty is re-enterable and
    /// exitable: after a reset the unit plays again from Question.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        deck: &Deck,
        store: &mut dyn StatusStore,
        rng: &mut R,
    ) -> Result<(), KarteiError> {
        let cleared = store.reset();
        self.rebuild(deck, store, rng);
        cleared
    }

    /// Human-readable "done/total" line for the selected unit.
    pub fn progress_text(&self, deck: &Deck, store: &dyn StatusStore) -> String {
        let cards = deck.cards_in_unit(&self.session.unit);
        let done = cards.iter().filter(|card| store.get(card.id()).is_done()).count();

        format!("{}/{} done", done, cards.len())
    }

    fn advance(&mut self) {
        self.session.phase =
            if self.session.queue.is_empty() { Phase::Empty } else { Phase::Question };
    }
}
