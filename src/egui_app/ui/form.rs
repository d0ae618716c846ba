use super::AquaSafeApp;
use super::style;
use crate::egui_app::view_model::PredictionView;
use crate::prediction::FormField;
use eframe::egui::{self, RichText};

const FIELD_WIDTH: f32 = 380.0;

impl AquaSafeApp {
    /// Render the measurement inputs and the submit control.
    ///
    /// Returns true when a submit was attempted this frame, after which `view`
    /// is stale.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui, view: &PredictionView) -> bool {
        let palette = style::palette();
        let editable = view.submit_enabled;
        let mut enter_pressed = false;

        for field in [FormField::Criteria, FormField::Percentage, FormField::SaltCount] {
            ui.label(RichText::new(field.label()).color(palette.text_primary));
            let state = &mut self.controller.form;
            let text = match field {
                FormField::Criteria => &mut state.fields.criteria,
                FormField::Percentage => &mut state.fields.percentage,
                FormField::SaltCount => &mut state.fields.salt_count,
            };
            let response = ui.add_enabled(
                editable,
                egui::TextEdit::singleline(text)
                    .hint_text(hint_text(field))
                    .desired_width(FIELD_WIDTH),
            );
            if state.focus_requested == Some(field) {
                response.request_focus();
                state.focus_requested = None;
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                enter_pressed = true;
            }
            if let Some(error) = view.field_error.filter(|error| error.field == field) {
                ui.label(RichText::new(error.message()).color(palette.warning).small());
            }
            ui.add_space(8.0);
        }

        ui.add_space(6.0);
        let mut submit_clicked = false;
        ui.horizontal(|ui| {
            let label = RichText::new(view.submit_label).strong();
            if ui
                .add_enabled(
                    view.submit_enabled,
                    egui::Button::new(label).min_size(egui::vec2(220.0, 34.0)),
                )
                .clicked()
            {
                submit_clicked = true;
            }
            if view.loader_visible {
                ui.add_space(8.0);
                ui.add(egui::Spinner::new());
            }
        });

        if (submit_clicked || enter_pressed) && view.submit_enabled {
            self.controller.submit_prediction();
            return true;
        }
        false
    }
}

fn hint_text(field: FormField) -> &'static str {
    match field {
        FormField::Criteria => "e.g. Lake, Present, Absent",
        FormField::Percentage => "0 – 100",
        FormField::SaltCount => "e.g. 82000",
    }
}
