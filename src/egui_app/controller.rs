//! Bridges the prediction form to the background request worker.

mod jobs;

use std::sync::Arc;

use crate::config::AppSettings;
use crate::egui_app::state::{FormState, PredictionUiModel, UiEvent, UiState, transition};
use crate::egui_app::view_model::{self, PredictionView};
use crate::prediction::{InputLimits, PredictionClient, validate_inputs};

use jobs::{ControllerJobs, JobMessage, PredictionJob, PredictionJobResult};

/// Owns the form, the UI model, and the in-flight request.
pub struct PredictionController {
    pub form: FormState,
    model: PredictionUiModel,
    limits: InputLimits,
    client: Arc<PredictionClient>,
    jobs: ControllerJobs,
}

impl PredictionController {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            form: FormState::default(),
            model: PredictionUiModel::default(),
            limits: settings.limits,
            client: Arc::new(PredictionClient::new(settings)),
            jobs: ControllerJobs::new(),
        }
    }

    pub fn model(&self) -> &PredictionUiModel {
        &self.model
    }

    pub fn view(&self) -> PredictionView {
        view_model::prediction_view(&self.model)
    }

    pub fn is_loading(&self) -> bool {
        self.model.state == UiState::Loading
    }

    /// Validate the form and, if it passes, start a prediction request.
    ///
    /// Returns true when a request was dispatched. Ignored while a request is
    /// already in flight.
    pub fn submit_prediction(&mut self) -> bool {
        if self.jobs.prediction_in_progress() {
            return false;
        }
        let input = match validate_inputs(&self.form.fields, &self.limits) {
            Ok(input) => input,
            Err(error) => {
                tracing::debug!(field = ?error.field, "Rejected prediction form: {error}");
                self.form.focus_requested = Some(error.field);
                self.apply(UiEvent::SubmitRejected(error));
                return false;
            }
        };
        self.apply(UiEvent::SubmitAccepted);
        self.jobs
            .begin_prediction(Arc::clone(&self.client), PredictionJob { input })
    }

    /// Apply any finished background work. Call once per frame.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::PredictionFinished(message) => self.handle_prediction_finished(message),
            }
        }
    }

    /// Hide the result card. Its content stays until the next result replaces it.
    pub fn dismiss_result(&mut self) {
        self.apply(UiEvent::Dismiss);
    }

    fn handle_prediction_finished(&mut self, message: PredictionJobResult) {
        self.jobs.clear_prediction();
        let event = match message.result {
            Ok(response) => UiEvent::RequestSucceeded(response),
            Err(_) => UiEvent::RequestFailed,
        };
        self.apply(event);
    }

    fn apply(&mut self, event: UiEvent) {
        let model = std::mem::take(&mut self.model);
        self.model = transition(model, event);
    }
}
