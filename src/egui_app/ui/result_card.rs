use super::AquaSafeApp;
use super::style;
use crate::egui_app::view_model::{PredictionView, ResultPanelView};
use eframe::egui::{self, Align2, FontId, Frame, Margin, RichText, Sense, Stroke};

const RING_SIZE: f32 = 64.0;

impl AquaSafeApp {
    /// Render the result card when the view exposes one.
    pub(super) fn render_result_card(&mut self, ui: &mut egui::Ui, view: &PredictionView) {
        let Some(panel) = view.result_panel.as_ref() else {
            return;
        };
        let mut close_clicked = false;
        Frame::new()
            .fill(style::palette().bg_secondary)
            .stroke(style::card_border())
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    render_status_ring(ui, panel);
                    ui.add_space(12.0);
                    render_result_text(ui, panel);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.small_button("✕").on_hover_text("Close").clicked() {
                            close_clicked = true;
                        }
                    });
                });
            });
        if close_clicked {
            self.controller.dismiss_result();
        }
    }
}

fn render_status_ring(ui: &mut egui::Ui, panel: &ResultPanelView) {
    let colors = style::variant_colors(panel.variant);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(RING_SIZE, RING_SIZE), Sense::hover());
    let painter = ui.painter();
    let radius = RING_SIZE * 0.5 - 3.0;
    painter.circle_filled(rect.center(), radius + 2.0, colors.glow);
    painter.circle_stroke(rect.center(), radius, Stroke::new(2.5, colors.ring));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        panel.variant.icon(),
        FontId::proportional(26.0),
        colors.text,
    );
}

fn render_result_text(ui: &mut egui::Ui, panel: &ResultPanelView) {
    let colors = style::variant_colors(panel.variant);
    let muted = style::palette().text_muted;
    ui.vertical(|ui| {
        ui.label(RichText::new("Prediction").color(muted).small());
        ui.label(
            RichText::new(&panel.prediction)
                .color(colors.text)
                .size(22.0)
                .strong(),
        );
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Risk level:").color(muted));
            ui.label(RichText::new(&panel.risk_level).color(colors.text));
        });
    });
}
