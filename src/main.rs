use eframe::egui;
use kartei::gui::KarteiApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Kartei"),
        ..Default::default()
    };

    eframe::run_native("Kartei", options, Box::new(|cc| Ok(Box::new(KarteiApp::new(cc)))))
}
