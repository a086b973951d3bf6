use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    gui::recent_decks::RecentDecks,
    persistence::{
        load_json_or_default,
        save_json,
    },
    session::{
        Direction,
        RetryPolicy,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub retry_policy: RetryPolicy,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default)]
    pub last_deck: Option<String>,
    #[serde(default)]
    pub recent_decks: RecentDecks,
}

fn default_dark_mode() -> bool {
    true
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            retry_policy: RetryPolicy::default(),
            dark_mode: default_dark_mode(),
            last_deck: None,
            recent_decks: RecentDecks::default(),
        }
    }
}

impl SettingsData {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) {
        if let Err(e) = save_json(self, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
