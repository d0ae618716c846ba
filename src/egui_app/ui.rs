//! egui renderer for the prediction form.

mod form;
mod result_card;
pub mod style;

use std::time::Duration;

use crate::config::AppSettings;
use crate::egui_app::controller::PredictionController;
use crate::egui_app::view_model::PredictionView;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window that fits the form and the result card.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(460.0, 560.0);
/// Repaint cadence while a request is in flight, so the spinner animates and
/// the completion is picked up without user input.
const LOADING_REPAINT: Duration = Duration::from_millis(50);

/// Renders the prediction form using the shared controller state.
pub struct AquaSafeApp {
    controller: PredictionController,
    visuals_set: bool,
}

impl AquaSafeApp {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            controller: PredictionController::new(settings),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// When the next frame is needed: right away after a submit, on a short
    /// cadence while a request is in flight, otherwise only on input.
    fn repaint_after(&self, submitted: bool) -> Option<Duration> {
        if submitted {
            Some(Duration::ZERO)
        } else if self.controller.is_loading() {
            Some(LOADING_REPAINT)
        } else {
            None
        }
    }

    fn render_error_banner(&self, ui: &mut egui::Ui, view: &PredictionView) {
        let Some(message) = view.error_banner else {
            return;
        };
        let palette = style::palette();
        Frame::new()
            .fill(style::error_banner_fill())
            .stroke(egui::Stroke::new(1.0, palette.danger))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(message).color(palette.danger).strong());
            });
        ui.add_space(12.0);
    }
}

impl eframe::App for AquaSafeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        let view = self.controller.view();
        let mut submitted = false;

        egui::CentralPanel::default()
            .frame(Frame::new().inner_margin(Margin::same(24)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("AquaSafe").size(28.0).strong());
                    ui.label(
                        RichText::new("Water contamination prediction")
                            .color(style::palette().text_muted),
                    );
                });
                ui.add_space(16.0);
                self.render_error_banner(ui, &view);
                submitted = self.render_form(ui, &view);
                ui.add_space(16.0);
                if submitted {
                    let fresh = self.controller.view();
                    self.render_result_card(ui, &fresh);
                } else {
                    self.render_result_card(ui, &view);
                }
            });

        if let Some(delay) = self.repaint_after(submitted) {
            ctx.request_repaint_after(delay);
        }
    }
}
