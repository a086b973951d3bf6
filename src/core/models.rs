use serde::{
    Deserialize,
    Serialize,
};

// Joins the fields that define a card's identity. None of the expected deck
// content contains it, so collisions are not handled.
const ID_SEPARATOR: &str = "|||";

/// One parsed deck row. Produced once at load time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub unit: String,
    pub source: String,
    pub target: String,
    pub grade: Option<String>,
}

/// A record plus its derived identity. The id depends only on
/// (unit, source, target), so saved status survives re-parsing even when the
/// deck file is reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    record: Record,
    id: String,
}

impl Card {
    pub fn new(record: Record) -> Self {
        let id = derive_id(&record);
        Self { record, id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn unit(&self) -> &str {
        &self.record.unit
    }

    pub fn source(&self) -> &str {
        &self.record.source
    }

    pub fn target(&self) -> &str {
        &self.record.target
    }

    pub fn grade(&self) -> Option<&str> {
        self.record.grade.as_deref()
    }
}

fn derive_id(record: &Record) -> String {
    [record.unit.as_str(), record.source.as_str(), record.target.as_str()].join(ID_SEPARATOR)
}

/// Per-card mastery marker. The serde tokens are the on-disk vocabulary of
/// the status blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "learn")]
    Learning,
    #[serde(rename = "retry")]
    Retry,
    #[serde(rename = "done")]
    Done,
}

impl Status {
    pub fn is_done(self) -> bool {
        matches!(self, Status::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(unit: &str, source: &str, target: &str) -> Record {
        Record {
            unit: unit.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            grade: None,
        }
    }

    #[test]
    fn id_is_stable_across_calls() {
        let a = Card::new(record("1", "der Hund", "el perro"));
        let b = Card::new(record("1", "der Hund", "el perro"));
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn id_distinguishes_every_identity_field() {
        let base = Card::new(record("1", "rot", "rojo"));
        assert_ne!(base.id(), Card::new(record("2", "rot", "rojo")).id());
        assert_ne!(base.id(), Card::new(record("1", "blau", "rojo")).id());
        assert_ne!(base.id(), Card::new(record("1", "rot", "azul")).id());
    }

    #[test]
    fn grade_does_not_change_identity() {
        let mut graded = record("1", "rot", "rojo");
        graded.grade = Some("7".to_string());
        assert_eq!(Card::new(graded).id(), Card::new(record("1", "rot", "rojo")).id());
    }

    #[test]
    fn status_defaults_to_learning() {
        assert_eq!(Status::default(), Status::Learning);
        assert!(!Status::Learning.is_done());
        assert!(!Status::Retry.is_done());
        assert!(Status::Done.is_done());
    }

    #[test]
    fn status_serializes_with_short_tokens() {
        assert_eq!(serde_json::to_string(&Status::Learning).unwrap(), "\"learn\"");
        assert_eq!(serde_json::to_string(&Status::Retry).unwrap(), "\"retry\"");
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
    }
}
