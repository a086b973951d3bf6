use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

use crate::core::Status;

/// Color pair registered for both egui theme variants. The status accents are
/// the only colors the trainer leans on semantically: learning is amber,
/// retry is red, done is green.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    panel: Color32,
    sunken: Color32,
    foreground: Color32,
    accent: Color32,
    green: Color32,
    red: Color32,
    amber: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Theme {
            dark: Palette {
                background: Color32::from_rgb(30, 33, 40),
                panel: Color32::from_rgb(36, 40, 48),
                sunken: Color32::from_rgb(24, 26, 32),
                foreground: Color32::from_rgb(214, 218, 226),
                accent: Color32::from_rgb(122, 162, 247),
                green: Color32::from_rgb(110, 200, 132),
                red: Color32::from_rgb(235, 110, 110),
                amber: Color32::from_rgb(229, 180, 94),
            },
            light: Palette {
                background: Color32::from_rgb(246, 247, 249),
                panel: Color32::from_rgb(238, 240, 244),
                sunken: Color32::from_rgb(226, 229, 235),
                foreground: Color32::from_rgb(42, 46, 54),
                accent: Color32::from_rgb(62, 100, 190),
                green: Color32::from_rgb(58, 150, 88),
                red: Color32::from_rgb(190, 64, 64),
                amber: Color32::from_rgb(176, 128, 42),
            },
        }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent)
    }

    pub fn bold(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).foreground).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn amber(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).amber
    }

    pub fn status_color(&self, ctx: &egui::Context, status: Status) -> Color32 {
        match status {
            Status::Learning => self.amber(ctx),
            Status::Retry => self.red(ctx),
            Status::Done => self.green(ctx),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    apply_variant(ctx, &theme.dark, egui::Theme::Dark);
    apply_variant(ctx, &theme.light, egui::Theme::Light);
}

fn apply_variant(ctx: &egui::Context, palette: &Palette, variant: egui::Theme) {
    let is_dark = matches!(variant, egui::Theme::Dark);
    let default = if is_dark { Visuals::dark() } else { Visuals::light() };

    let mut widgets = default.widgets.clone();
    widgets.noninteractive.fg_stroke =
        Stroke { color: palette.foreground, ..widgets.noninteractive.fg_stroke };
    widgets.inactive.fg_stroke = Stroke { color: palette.foreground, ..widgets.inactive.fg_stroke };
    widgets.hovered.bg_stroke = Stroke { color: palette.accent, ..widgets.hovered.bg_stroke };
    widgets.active.bg_stroke = Stroke { color: palette.accent, ..widgets.active.bg_stroke };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets,
            hyperlink_color: palette.accent,
            faint_bg_color: palette.sunken,
            extreme_bg_color: palette.sunken,
            error_fg_color: palette.red,
            warn_fg_color: palette.amber,
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.panel, ..default.window_stroke },
            panel_fill: palette.panel,
            ..default
        },
    );
}
