use std::collections::VecDeque;

use rand::{
    seq::SliceRandom,
    Rng,
};

use crate::{
    core::Card,
    progress::StatusStore,
};

/// Builds the active queue for one unit: every card still marked learn or
/// retry, in unbiased random order. An empty queue means the whole unit is
/// done; that is a valid terminal state, not an error.
pub fn build_queue<R: Rng + ?Sized>(
    cards: &[Card],
    unit: &str,
    store: &dyn StatusStore,
    rng: &mut R,
) -> VecDeque<Card> {
    let mut queue: Vec<Card> = cards
        .iter()
        .filter(|card| card.unit() == unit)
        .filter(|card| !store.get(card.id()).is_done())
        .cloned()
        .collect();

    // Fisher-Yates, via the slice implementation.
    queue.shuffle(rng);
    queue.into()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::{
        core::{
            Record,
            Status,
        },
        progress::MemoryStatusStore,
    };

    fn cards(specs: &[(&str, &str, &str)]) -> Vec<Card> {
        specs
            .iter()
            .map(|(unit, source, target)| {
                Card::new(Record {
                    unit: unit.to_string(),
                    source: source.to_string(),
                    target: target.to_string(),
                    grade: None,
                })
            })
            .collect()
    }

    #[test]
    fn queue_is_scoped_to_the_unit() {
        let cards = cards(&[("1", "a", "x"), ("2", "b", "y"), ("1", "c", "z")]);
        let store = MemoryStatusStore::new();
        let mut rng = StdRng::seed_from_u64(1);

        let queue = build_queue(&cards, "1", &store, &mut rng);

        assert_eq!(queue.len(), 2);
        assert!(queue.iter().all(|card| card.unit() == "1"));
    }

    #[test]
    fn done_cards_are_excluded_until_reset() {
        let cards = cards(&[("1", "a", "x"), ("1", "b", "y"), ("1", "c", "z")]);
        let mut store = MemoryStatusStore::new();
        let mut rng = StdRng::seed_from_u64(2);

        store.set(cards[1].id(), Status::Done).unwrap();
        let queue = build_queue(&cards, "1", &store, &mut rng);
        assert_eq!(queue.len(), 2);
        assert!(queue.iter().all(|card| card.id() != cards[1].id()));

        store.reset().unwrap();
        let queue = build_queue(&cards, "1", &store, &mut rng);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn retry_cards_stay_in_the_queue() {
        let cards = cards(&[("1", "a", "x"), ("1", "b", "y")]);
        let mut store = MemoryStatusStore::new();
        let mut rng = StdRng::seed_from_u64(3);

        store.set(cards[0].id(), Status::Retry).unwrap();

        assert_eq!(build_queue(&cards, "1", &store, &mut rng).len(), 2);
    }

    #[test]
    fn queue_empty_iff_every_card_is_done() {
        let cards = cards(&[("1", "a", "x"), ("1", "b", "y")]);
        let mut store = MemoryStatusStore::new();
        let mut rng = StdRng::seed_from_u64(4);

        store.set(cards[0].id(), Status::Done).unwrap();
        assert!(!build_queue(&cards, "1", &store, &mut rng).is_empty());

        store.set(cards[1].id(), Status::Done).unwrap();
        assert!(build_queue(&cards, "1", &store, &mut rng).is_empty());
    }

    #[test]
    fn queue_is_a_permutation_of_the_filtered_input() {
        let cards = cards(&[("1", "a", "x"), ("1", "b", "y"), ("1", "c", "z"), ("1", "d", "w")]);
        let store = MemoryStatusStore::new();
        let mut rng = StdRng::seed_from_u64(5);

        let queue = build_queue(&cards, "1", &store, &mut rng);

        let expected: HashSet<&str> = cards.iter().map(Card::id).collect();
        let shuffled: HashSet<&str> = queue.iter().map(Card::id).collect();
        assert_eq!(queue.len(), cards.len());
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        let cards = cards(&[("1", "a", "x"), ("1", "b", "y"), ("1", "c", "z"), ("1", "d", "w")]);
        let store = MemoryStatusStore::new();
        let mut rng = StdRng::seed_from_u64(6);

        let trials = 8000;
        let tracked = cards[0].id().to_string();
        let mut position_counts = [0usize; 4];

        for _ in 0..trials {
            let queue = build_queue(&cards, "1", &store, &mut rng);
            let position =
                queue.iter().position(|card| card.id() == tracked).expect("card present");
            position_counts[position] += 1;
        }

        // Each position should get about trials/4 hits; a 25% relative band is
        // far beyond what an unbiased shuffle will miss at this sample size.
        let expected = trials / 4;
        let tolerance = expected / 4;
        for (position, &count) in position_counts.iter().enumerate() {
            assert!(
                count > expected - tolerance && count < expected + tolerance,
                "position {} hit {} times, expected about {}",
                position,
                count,
                expected
            );
        }
    }
}
