pub mod loader;

#[cfg(test)]
mod loader_tests;

use std::{
    cmp::Ordering,
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use crate::core::{
    Card,
    KarteiError,
    Record,
};

/// A loaded deck: every card with its derived identity, plus the unit list in
/// display order. Cards keep input row order within a unit.
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    path: Option<PathBuf>,
    cards: Vec<Card>,
    units: Vec<String>,
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self, KarteiError> {
        let text = fs::read_to_string(path)
            .map_err(|e| KarteiError::FailedToLoadDeck(format!("{}: {}", path.display(), e)))?;
        let records = loader::parse_records(&text)?;

        let title =
            path.file_stem().and_then(|name| name.to_str()).unwrap_or("deck").to_string();

        let mut deck = Self::from_records(title, records);
        deck.path = Some(path.to_path_buf());
        Ok(deck)
    }

    pub fn from_records(title: String, records: Vec<Record>) -> Self {
        let cards: Vec<Card> = records.into_iter().map(Card::new).collect();

        let mut units: Vec<String> = Vec::new();
        for card in &cards {
            if !units.iter().any(|unit| unit == card.unit()) {
                units.push(card.unit().to_string());
            }
        }
        units.sort_by(|a, b| compare_units(a, b));

        Self { title, path: None, cards, units }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn first_unit(&self) -> Option<&str> {
        self.units.first().map(String::as_str)
    }

    pub fn cards_in_unit(&self, unit: &str) -> Vec<&Card> {
        self.cards.iter().filter(|card| card.unit() == unit).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// Unit labels that parse as integers sort numerically so "10" follows "2";
// everything else sorts lexicographically after them.
fn compare_units(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
