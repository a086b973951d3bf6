use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

/// Open-deck dialog: native file picker plus a confirm step showing what was
/// selected.
#[derive(Default)]
pub struct DeckModal {
    open: bool,
    selected: Option<PathBuf>,
}

impl DeckModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_dialog(&mut self) {
        self.open = true;
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the chosen path on the frame the user confirms.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        if !self.open {
            return None;
        }

        let mut picked = None;
        let mut close = false;

        egui::Window::new("Open Deck")
            .collapsible(false)
            .resizable(false)
            .fixed_size(egui::Vec2::new(420.0, 150.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Select a vocabulary file (CSV with unit, source and target columns):");
                ui.add_space(10.0);

                if ui.button("Browse...").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("CSV files", &["csv"])
                        .add_filter("Text files", &["txt", "tsv"])
                        .pick_file()
                    {
                        self.selected = Some(path);
                    }
                }

                if let Some(path) = &self.selected {
                    ui.add_space(8.0);
                    ui.label(format!(
                        "Selected: {}",
                        path.file_name().unwrap_or_default().to_string_lossy()
                    ));
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let can_confirm = self.selected.is_some();
                    if ui.add_enabled(can_confirm, egui::Button::new("Open")).clicked() {
                        picked = self.selected.take();
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        self.selected = None;
                        close = true;
                    }
                });
            });

        if close {
            self.open = false;
        }

        picked
    }
}
