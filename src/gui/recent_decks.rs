use std::{
    collections::VecDeque,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentDeckEntry {
    pub path: String,
    pub title: String,
    pub last_opened: chrono::DateTime<chrono::Utc>,
    pub card_count: usize,
    pub unit_count: usize,
}

impl RecentDeckEntry {
    pub fn file_exists(&self) -> bool {
        Path::new(&self.path).exists()
    }

    pub fn format_last_opened(&self) -> String {
        let local_time = self.last_opened.with_timezone(&chrono::Local);
        local_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn format_counts(&self) -> String {
        let cards = match self.card_count {
            1 => "1 card".to_string(),
            n => format!("{} cards", n),
        };
        let units = match self.unit_count {
            1 => "1 unit".to_string(),
            n => format!("{} units", n),
        };

        format!("{} in {}", cards, units)
    }
}

/// Most-recent-first list of opened decks, deduplicated by path and capped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentDecks {
    decks: VecDeque<RecentDeckEntry>,
    max_entries: usize,
}

impl Default for RecentDecks {
    fn default() -> Self {
        Self::new(8)
    }
}

impl RecentDecks {
    pub fn new(max_entries: usize) -> Self {
        Self { decks: VecDeque::new(), max_entries }
    }

    pub fn add(&mut self, path: String, title: String, card_count: usize, unit_count: usize) {
        self.decks.retain(|entry| entry.path != path);

        self.decks.push_front(RecentDeckEntry {
            path,
            title,
            last_opened: chrono::Utc::now(),
            card_count,
            unit_count,
        });

        while self.decks.len() > self.max_entries {
            self.decks.pop_back();
        }
    }

    pub fn valid_entries(&self) -> Vec<&RecentDeckEntry> {
        self.decks.iter().filter(|entry| entry.file_exists()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_moves_a_deck_to_the_front_without_duplicating() {
        let mut recent = RecentDecks::new(4);
        recent.add("a.csv".to_string(), "a".to_string(), 10, 2);
        recent.add("b.csv".to_string(), "b".to_string(), 5, 1);
        recent.add("a.csv".to_string(), "a".to_string(), 12, 3);

        assert_eq!(recent.len(), 2);
        let first = recent.decks.front().unwrap();
        assert_eq!(first.path, "a.csv");
        assert_eq!(first.card_count, 12);
    }

    #[test]
    fn list_is_capped_at_max_entries() {
        let mut recent = RecentDecks::new(2);
        recent.add("a.csv".to_string(), "a".to_string(), 1, 1);
        recent.add("b.csv".to_string(), "b".to_string(), 1, 1);
        recent.add("c.csv".to_string(), "c".to_string(), 1, 1);

        assert_eq!(recent.len(), 2);
        assert!(recent.decks.iter().all(|entry| entry.path != "a.csv"));
    }

    #[test]
    fn counts_format_with_singulars() {
        let mut recent = RecentDecks::default();
        recent.add("a.csv".to_string(), "a".to_string(), 1, 1);

        assert_eq!(recent.decks.front().unwrap().format_counts(), "1 card in 1 unit");
    }
}
