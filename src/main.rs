#![deny(missing_docs)]

//! Entry point for the AquaSafe desktop client.
use aquasafe::config;
use aquasafe::egui_app::ui::{AquaSafeApp, MIN_VIEWPORT_SIZE};
use aquasafe::logging::{self, ConsoleTarget};
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init(ConsoleTarget::Stdout) {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_default();
    if let Ok(settings) = &settings {
        tracing::info!(
            endpoint = %settings.prediction.endpoint,
            ux_delay_ms = settings.prediction.ux_delay_ms,
            "Configuration loaded"
        );
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AquaSafe")
            .with_inner_size(MIN_VIEWPORT_SIZE)
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "AquaSafe",
        native_options,
        Box::new(move |_cc| match settings {
            Ok(settings) => Ok(Box::new(AquaSafeApp::new(&settings))),
            Err(err) => {
                tracing::error!(error = %err, "Failed to load configuration");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start AquaSafe");
                ui.label(&self.message);
            });
        });
    }
}
