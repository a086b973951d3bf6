use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
};

use crate::{
    core::{
        KarteiError,
        Status,
    },
    persistence::get_app_data_dir,
};

pub const STATUS_FILE: &str = "card_status.json";

/// Per-card mastery persistence. The session layer only sees this trait, so
/// any key-value backend satisfies it.
pub trait StatusStore {
    /// Learning when the id has never been recorded.
    fn get(&self, id: &str) -> Status;

    /// Overwrites and persists immediately. A persistence failure is returned
    /// to the caller as a non-fatal warning; the in-memory state is already
    /// updated either way.
    fn set(&mut self, id: &str, status: Status) -> Result<(), KarteiError>;

    /// Clears every entry and persists the empty mapping.
    fn reset(&mut self) -> Result<(), KarteiError>;
}

/// Status store backed by one flat JSON object on disk, flushed after every
/// mutation.
#[derive(Debug)]
pub struct JsonStatusStore {
    file_path: PathBuf,
    statuses: HashMap<String, Status>,
}

impl JsonStatusStore {
    pub fn load_default() -> Self {
        Self::load(get_app_data_dir().join(STATUS_FILE))
    }

    /// Fails soft: any read or parse error starts an empty store. Losing
    /// saved progress is acceptable; refusing to start is not.
    pub fn load(file_path: PathBuf) -> Self {
        let statuses = if file_path.exists() {
            match fs::read_to_string(&file_path) {
                Ok(json) => match serde_json::from_str(&json) {
                    Ok(statuses) => statuses,
                    Err(e) => {
                        eprintln!(
                            "Corrupt status file {}: {}. Starting fresh.",
                            file_path.display(),
                            e
                        );
                        HashMap::new()
                    }
                },
                Err(e) => {
                    eprintln!(
                        "Failed to read status file {}: {}. Starting fresh.",
                        file_path.display(),
                        e
                    );
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Self { file_path, statuses }
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    fn save(&self) -> Result<(), KarteiError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.statuses)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }
}

impl StatusStore for JsonStatusStore {
    fn get(&self, id: &str) -> Status {
        self.statuses.get(id).copied().unwrap_or_default()
    }

    fn set(&mut self, id: &str, status: Status) -> Result<(), KarteiError> {
        self.statuses.insert(id.to_string(), status);
        self.save()
    }

    fn reset(&mut self) -> Result<(), KarteiError> {
        self.statuses.clear();
        self.save()
    }
}

/// Trait-complete store with no persistence. Used by tests and anywhere a
/// throwaway store is enough.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    statuses: HashMap<String, Status>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusStore for MemoryStatusStore {
    fn get(&self, id: &str) -> Status {
        self.statuses.get(id).copied().unwrap_or_default()
    }

    fn set(&mut self, id: &str, status: Status) -> Result<(), KarteiError> {
        self.statuses.insert(id.to_string(), status);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), KarteiError> {
        self.statuses.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_store_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("kartei-tests");
        fs::create_dir_all(&dir).expect("temp dir");
        dir.join(format!("{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn absent_ids_read_as_learning() {
        let store = MemoryStatusStore::new();
        assert_eq!(store.get("never-seen"), Status::Learning);
    }

    #[test]
    fn set_then_get_round_trips_in_memory() {
        let mut store = MemoryStatusStore::new();
        store.set("a", Status::Done).unwrap();
        store.set("b", Status::Retry).unwrap();

        assert_eq!(store.get("a"), Status::Done);
        assert_eq!(store.get("b"), Status::Retry);
    }

    #[test]
    fn json_store_round_trips_across_loads() {
        let path = temp_store_path("round-trip");
        let _ = fs::remove_file(&path);

        let mut store = JsonStatusStore::load(path.clone());
        store.set("a", Status::Done).unwrap();
        store.set("b", Status::Retry).unwrap();
        store.set("a", Status::Retry).unwrap();

        let reloaded = JsonStatusStore::load(path.clone());
        assert_eq!(reloaded.get("a"), Status::Retry);
        assert_eq!(reloaded.get("b"), Status::Retry);
        assert_eq!(reloaded.get("c"), Status::Learning);
        assert_eq!(reloaded.len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_loads_as_empty_store() {
        let path = temp_store_path("corrupt");
        fs::write(&path, "{not json").unwrap();

        let store = JsonStatusStore::load(path.clone());
        assert!(store.is_empty());
        assert_eq!(store.get("a"), Status::Learning);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let path = temp_store_path("missing");
        let _ = fs::remove_file(&path);

        let store = JsonStatusStore::load(path);
        assert!(store.is_empty());
    }

    #[test]
    fn reset_clears_memory_and_disk() {
        let path = temp_store_path("reset");
        let _ = fs::remove_file(&path);

        let mut store = JsonStatusStore::load(path.clone());
        store.set("a", Status::Done).unwrap();
        store.reset().unwrap();

        assert_eq!(store.get("a"), Status::Learning);
        assert!(JsonStatusStore::load(path.clone()).is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn on_disk_blob_uses_short_status_tokens() {
        let path = temp_store_path("tokens");
        let _ = fs::remove_file(&path);

        let mut store = JsonStatusStore::load(path.clone());
        store.set("1|||rot|||rojo", Status::Done).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"done\""));
        assert!(json.contains("1|||rot|||rojo"));

        let _ = fs::remove_file(&path);
    }
}
