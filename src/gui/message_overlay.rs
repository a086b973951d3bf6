use eframe::egui;

use crate::gui::theme::Theme;

enum OverlayMessage {
    Loading(String),
    Error(String),
}

/// Full-window overlay for the two blocking states: the startup deck load
/// (spinner) and a failed load (terminal until the user opens another deck).
pub struct MessageOverlay {
    message: Option<OverlayMessage>,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_loading(&mut self, message: impl Into<String>) {
        self.message = Some(OverlayMessage::Loading(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some(OverlayMessage::Error(message.into()));
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn is_active(&self) -> bool {
        self.message.is_some()
    }

    /// Returns true when the user asked to open another deck from the error
    /// box (the only way out of a failed load).
    pub fn show(&self, ctx: &egui::Context, theme: &Theme) -> bool {
        let Some(message) = &self.message else {
            return false;
        };

        // Dim and swallow input behind the box.
        egui::Area::new(egui::Id::new("message_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(120));
            });

        let stroke_color = match message {
            OverlayMessage::Loading(_) => theme.accent(ctx),
            OverlayMessage::Error(_) => theme.red(ctx),
        };

        let mut open_requested = false;
        egui::Window::new("message_box")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .min_size(egui::Vec2::new(260.0, 80.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.style_mut().visuals.window_stroke = egui::Stroke::new(2.0, stroke_color);

                ui.vertical_centered(|ui| match message {
                    OverlayMessage::Loading(text) => {
                        ui.add_space(8.0);
                        ui.spinner();
                        ui.add_space(4.0);
                        ui.label(text);
                        ui.add_space(8.0);
                    }
                    OverlayMessage::Error(text) => {
                        ui.add_space(8.0);
                        ui.colored_label(stroke_color, "Could not load the deck");
                        ui.add_space(4.0);
                        ui.label(text);
                        ui.add_space(8.0);
                        if ui.button("Open another deck...").clicked() {
                            open_requested = true;
                        }
                        ui.add_space(8.0);
                    }
                });
            });

        open_requested
    }
}

impl Default for MessageOverlay {
    fn default() -> Self {
        Self::new()
    }
}
