use std::path::PathBuf;

use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};
use rand::rngs::ThreadRng;

use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        Status,
    },
    deck::Deck,
    gui::{
        deck_modal::DeckModal,
        message_overlay::MessageOverlay,
        modal::{
            Choice,
            ConfirmModal,
        },
        settings::SettingsData,
        theme::{
            set_theme,
            Theme,
        },
    },
    progress::{
        JsonStatusStore,
        StatusStore,
    },
    session::{
        Direction,
        Phase,
        SessionController,
    },
};

enum TopBarAction {
    OpenDeck,
    SelectUnit(String),
    ToggleDirection,
    ResetProgress,
}

enum CardAction {
    Reveal,
    MarkCorrect,
    MarkIncorrect,
    ResetProgress,
    OpenDeck,
    OpenRecent(PathBuf),
}

pub struct KarteiApp {
    // Deck data
    deck: Option<Deck>,
    controller: Option<SessionController>,
    store: JsonStatusStore,

    // Configuration
    settings: SettingsData,

    // UI state
    theme: Theme,
    overlay: MessageOverlay,
    deck_modal: DeckModal,
    reset_confirm: ConfirmModal,
    warning: Option<String>,

    task_manager: TaskManager,
    rng: ThreadRng,
}

impl KarteiApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = SettingsData::load();
        let store = JsonStatusStore::load_default();
        let task_manager = TaskManager::new();
        let mut overlay = MessageOverlay::new();

        // Reopen the last deck without blocking the first frame. Until the
        // load resolves every affordance stays disabled behind the overlay.
        if let Some(path) = &settings.last_deck {
            overlay.set_loading(format!("Loading {}...", path));
            task_manager.load_deck(PathBuf::from(path));
        }

        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Self {
            deck: None,
            controller: None,
            store,
            settings,
            theme,
            overlay,
            deck_modal: DeckModal::new(),
            reset_confirm: ConfirmModal::new("Reset progress"),
            warning: None,
            task_manager,
            rng: rand::rng(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoadingMessage(message) => self.overlay.set_loading(message),
            TaskResult::DeckLoaded(Ok(deck)) => self.install_deck(deck),
            TaskResult::DeckLoaded(Err(e)) => self.overlay.set_error(e),
        }
    }

    fn install_deck(&mut self, deck: Deck) {
        self.overlay.clear();
        self.warning = None;

        if deck.is_empty() {
            self.warning = Some("The deck loaded but contains no usable rows.".to_string());
        }

        let unit = deck.first_unit().unwrap_or_default().to_string();
        let controller = SessionController::new(
            &deck,
            &unit,
            &self.store,
            self.settings.retry_policy,
            self.settings.direction,
            &mut self.rng,
        );

        if let Some(path) = deck.path() {
            self.settings.last_deck = Some(path.display().to_string());
            self.settings.recent_decks.add(
                path.display().to_string(),
                deck.title().to_string(),
                deck.cards().len(),
                deck.units().len(),
            );
            self.settings.save();
        }

        self.controller = Some(controller);
        self.deck = Some(deck);
    }

    fn open_deck(&mut self, path: PathBuf) {
        self.warning = None;
        self.overlay.set_loading(format!("Loading {}...", path.display()));
        self.task_manager.load_deck(path);
    }

    fn interaction_enabled(&self) -> bool {
        !self.overlay.is_active() && !self.reset_confirm.is_open() && !self.deck_modal.is_open()
    }

    fn show_top_bar(&self, ctx: &egui::Context) -> Option<TopBarAction> {
        let mut action = None;
        let enabled = self.interaction_enabled();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Open Deck").clicked() {
                        action = Some(TopBarAction::OpenDeck);
                    }

                    if let (Some(deck), Some(controller)) = (&self.deck, &self.controller) {
                        ui.separator();
                        ui.label(self.theme.bold(ctx, deck.title()));

                        ui.separator();
                        ui.label("Unit:");
                        let mut selected = controller.unit().to_string();
                        egui::ComboBox::from_id_salt("unit_select")
                            .selected_text(selected.clone())
                            .show_ui(ui, |ui| {
                                for unit in deck.units() {
                                    ui.selectable_value(&mut selected, unit.clone(), unit);
                                }
                            });
                        if selected != controller.unit() {
                            action = Some(TopBarAction::SelectUnit(selected));
                        }

                        ui.separator();
                        let direction_label = match controller.direction() {
                            Direction::SourceFirst => "Asking: front",
                            Direction::TargetFirst => "Asking: back",
                        };
                        if ui
                            .button(direction_label)
                            .on_hover_text("Flip which side of the pair is asked")
                            .clicked()
                        {
                            action = Some(TopBarAction::ToggleDirection);
                        }

                        ui.separator();
                        if ui.button("Reset progress").clicked() {
                            action = Some(TopBarAction::ResetProgress);
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                self.theme.heading(ctx, &controller.progress_text(deck, &self.store)),
                            );
                            egui::widgets::global_theme_preference_buttons(ui);
                        });
                    } else {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            egui::widgets::global_theme_preference_buttons(ui);
                        });
                    }
                });
            });
        });

        action
    }

    fn show_card_panel(&self, ctx: &egui::Context) -> Option<CardAction> {
        let mut action = None;
        let enabled = self.interaction_enabled();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| match &self.controller {
                Some(controller) => self.card_ui(ctx, ui, controller, &mut action),
                None => self.welcome_ui(ctx, ui, &mut action),
            });
        });

        action
    }

    fn card_ui(
        &self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        controller: &SessionController,
        action: &mut Option<CardAction>,
    ) {
        ui.vertical_centered(|ui| {
            ui.add_space(28.0);

            if controller.phase() == Phase::Empty {
                ui.heading("All done");
                ui.add_space(4.0);
                ui.label(format!("Every card in unit {} is marked done.", controller.unit()));
                ui.add_space(12.0);
                if ui.button("Reset progress").clicked() {
                    *action = Some(CardAction::ResetProgress);
                }
                return;
            }

            let shown = controller.display_text().unwrap_or_default();
            ui.label(egui::RichText::new(shown).size(32.0).strong());
            ui.add_space(6.0);
            ui.weak(controller.hint_text());

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                // Keep the button row roughly centered under the card.
                let row_width = 240.0;
                let indent = (ui.available_width() - row_width).max(0.0) / 2.0;
                ui.add_space(indent);

                if ui
                    .add_enabled(controller.can_reveal(), egui::Button::new("Show"))
                    .clicked()
                {
                    *action = Some(CardAction::Reveal);
                }

                let wrong = egui::RichText::new("Wrong")
                    .color(self.theme.status_color(ctx, Status::Retry));
                if ui.add_enabled(controller.can_judge(), egui::Button::new(wrong)).clicked() {
                    *action = Some(CardAction::MarkIncorrect);
                }

                let right = egui::RichText::new("Right")
                    .color(self.theme.status_color(ctx, Status::Done));
                if ui.add_enabled(controller.can_judge(), egui::Button::new(right)).clicked() {
                    *action = Some(CardAction::MarkCorrect);
                }
            });

            ui.add_space(12.0);
            ui.weak(format!("{} left this round", controller.remaining()));
        });
    }

    fn welcome_ui(&self, ctx: &egui::Context, ui: &mut egui::Ui, action: &mut Option<CardAction>) {
        ui.vertical_centered(|ui| {
            ui.add_space(36.0);
            ui.heading("Kartei");
            ui.add_space(4.0);
            ui.label("Vocabulary flashcards from a CSV deck.");
            ui.add_space(12.0);
            if ui.button("Open Deck...").clicked() {
                *action = Some(CardAction::OpenDeck);
            }
        });

        let recent = self.settings.recent_decks.valid_entries();
        if recent.is_empty() {
            return;
        }

        ui.add_space(28.0);
        ui.label(self.theme.heading(ctx, "Recent decks"));
        ui.add_space(6.0);

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(150.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder())
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.label("Deck");
                });
                header.col(|ui| {
                    ui.label("Size");
                });
                header.col(|ui| {
                    ui.label("Last opened");
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for entry in &recent {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.strong(entry.title.as_str());
                        });
                        row.col(|ui| {
                            ui.label(entry.format_counts());
                        });
                        row.col(|ui| {
                            ui.label(entry.format_last_opened());
                        });
                        row.col(|ui| {
                            if ui.button("Open").clicked() {
                                *action =
                                    Some(CardAction::OpenRecent(PathBuf::from(&entry.path)));
                            }
                        });
                    });
                }
            });
    }

    fn show_warning_line(&mut self, ctx: &egui::Context) {
        if self.warning.is_none() {
            return;
        }

        let mut dismissed = false;
        egui::TopBottomPanel::bottom("warning_line").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(warning) = &self.warning {
                    ui.colored_label(self.theme.amber(ctx), warning);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });

        if dismissed {
            self.warning = None;
        }
    }

    fn apply_top_bar_action(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::OpenDeck => self.deck_modal.open_dialog(),
            TopBarAction::SelectUnit(unit) => self.change_unit(&unit),
            TopBarAction::ToggleDirection => {
                self.settings.direction = self.settings.direction.toggled();
                if let Some(controller) = &mut self.controller {
                    controller.set_direction(self.settings.direction);
                }
                self.settings.save();
            }
            TopBarAction::ResetProgress => self.reset_confirm.open(),
        }
    }

    fn apply_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Reveal => {
                if let Some(controller) = &mut self.controller {
                    controller.reveal();
                }
            }
            CardAction::MarkCorrect => {
                if let Some(controller) = &mut self.controller {
                    if let Err(e) = controller.mark_correct(&mut self.store) {
                        self.warning = Some(format!("Could not save progress: {}", e));
                    }
                }
            }
            CardAction::MarkIncorrect => {
                if let Some(controller) = &mut self.controller {
                    if let Err(e) = controller.mark_incorrect(&mut self.store) {
                        self.warning = Some(format!("Could not save progress: {}", e));
                    }
                }
            }
            CardAction::ResetProgress => self.reset_confirm.open(),
            CardAction::OpenDeck => self.deck_modal.open_dialog(),
            CardAction::OpenRecent(path) => self.open_deck(path),
        }
    }

    fn change_unit(&mut self, unit: &str) {
        if let (Some(deck), Some(controller)) = (&self.deck, &mut self.controller) {
            controller.change_unit(deck, unit, &self.store, &mut self.rng);
        }
    }

    fn reset_progress(&mut self) {
        if let Err(e) = self.store.reset() {
            self.warning = Some(format!("Could not clear saved progress: {}", e));
        }
        if let (Some(deck), Some(controller)) = (&self.deck, &mut self.controller) {
            controller.rebuild(deck, &self.store, &mut self.rng);
        }
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.settings.save();
        }
    }
}

impl eframe::App for KarteiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let top_action = self.show_top_bar(ctx);
        let card_action = self.show_card_panel(ctx);
        self.show_warning_line(ctx);

        if let Some(action) = top_action {
            self.apply_top_bar_action(action);
        }
        if let Some(action) = card_action {
            self.apply_card_action(action);
        }

        if let Some(choice) =
            self.reset_confirm.show(ctx, "Forget the saved status of every card in this deck?")
        {
            if choice == Choice::Confirmed {
                self.reset_progress();
            }
        }

        if self.overlay.show(ctx, &self.theme) {
            self.overlay.clear();
            self.deck_modal.open_dialog();
        }

        if let Some(path) = self.deck_modal.show(ctx) {
            self.open_deck(path);
        }

        self.sync_dark_mode(ctx);
    }
}
