use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Confirmed,
    Cancelled,
}

/// Centered yes/no dialog over a dimmed backdrop. The reset-progress action
/// is destructive, so it always goes through one of these.
pub struct ConfirmModal {
    title: String,
    open: bool,
}

impl ConfirmModal {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), open: false }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the choice on the frame it was made. Clicking the backdrop
    /// counts as cancelling.
    pub fn show(&mut self, ctx: &egui::Context, message: &str) -> Option<Choice> {
        if !self.open {
            return None;
        }

        let backdrop_clicked = show_backdrop(ctx);

        let mut choice = None;
        egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        choice = Some(Choice::Confirmed);
                    }
                    if ui.button("No").clicked() {
                        choice = Some(Choice::Cancelled);
                    }
                });
            });

        if choice.is_none() && backdrop_clicked {
            choice = Some(Choice::Cancelled);
        }
        if choice.is_some() {
            self.open = false;
        }

        choice
    }
}

fn show_backdrop(ctx: &egui::Context) -> bool {
    egui::Area::new(egui::Id::new("confirm_backdrop"))
        .order(egui::Order::Background)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            let (_rect, response) = ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(100));
            response.clicked()
        })
        .inner
}
