#![allow(dead_code)]

pub mod mock_server;

use std::time::{Duration, Instant};

use aquasafe::config::AppSettings;
use aquasafe::egui_app::controller::PredictionController;

/// Settings pointing at `endpoint` with no UX delay.
pub fn settings_for(endpoint: &str) -> AppSettings {
    let mut settings = AppSettings::default();
    settings.prediction.endpoint = endpoint.to_string();
    settings.prediction.ux_delay_ms = 0;
    settings
}

/// Fill the form the way a user would.
pub fn fill_form(controller: &mut PredictionController, criteria: &str, percentage: &str, salt_count: &str) {
    controller.form.fields.criteria = criteria.to_string();
    controller.form.fields.percentage = percentage.to_string();
    controller.form.fields.salt_count = salt_count.to_string();
}

/// Poll like the UI frame loop until the request completes.
pub fn wait_until_idle(controller: &mut PredictionController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        controller.poll_background_jobs();
        if !controller.is_loading() {
            return;
        }
        assert!(Instant::now() < deadline, "prediction request never completed");
        std::thread::sleep(Duration::from_millis(5));
    }
}
