//! Entry point for the egui-based practice tracker.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use natya_tracker::audio::{AudioPlayer, TrackOutput};
use natya_tracker::config;
use natya_tracker::egui_app::controller::TrackerController;
use natya_tracker::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use natya_tracker::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Bharatanatyam Practice Tracker")
        .with_inner_size(MIN_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Bharatanatyam Practice Tracker",
        native_options,
        Box::new(|_cc| {
            let app: Box<dyn eframe::App> = match build_controller() {
                Ok(controller) => Box::new(EguiApp::new(controller)),
                Err(message) => Box::new(LaunchError { message }),
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

fn build_controller() -> Result<TrackerController, String> {
    let settings =
        config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
    let output = AudioPlayer::new().map(|player| Box::new(player) as Box<dyn TrackOutput>);
    Ok(TrackerController::new(settings, output))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
