use std::{
    path::PathBuf,
    sync::mpsc,
    thread,
};

use crate::deck::Deck;

#[derive(Debug)]
pub enum TaskResult {
    LoadingMessage(String),
    DeckLoaded(Result<Deck, String>),
}

/// Runs the one operation that must not block the UI thread: loading a deck
/// file. Results are drained once per frame with `poll_results`.
pub struct TaskManager {
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        Self { receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn load_deck(&self, path: PathBuf) {
        let sender = self.sender.clone();

        thread::spawn(move || {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let _ = sender.send(TaskResult::LoadingMessage(format!("Loading {}...", name)));

            let result = Deck::load(&path).map_err(|e| e.to_string());
            let _ = sender.send(TaskResult::DeckLoaded(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
