//! Blocking prediction client used by the UI worker and the CLI.

use std::thread;
use std::time::Duration;

use crate::config::AppSettings;
use crate::http_client;

use super::api::{self, MeasurementInput, PredictionResponse};

/// The only failure text users ever see.
pub const CONNECTION_FAILED_MESSAGE: &str = "Connection Failed. Is backend running?";

/// A prediction request failed. The cause is logged, never displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Connection Failed. Is backend running?")]
pub struct RequestFailed;

/// Sends measurements to the configured prediction endpoint.
pub struct PredictionClient {
    agent: ureq::Agent,
    endpoint: String,
    ux_delay: Duration,
    max_response_bytes: usize,
}

impl PredictionClient {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            agent: http_client::build_agent(&settings.network),
            endpoint: settings.prediction.endpoint.clone(),
            ux_delay: Duration::from_millis(settings.prediction.ux_delay_ms),
            max_response_bytes: settings.network.max_response_bytes,
        }
    }

    /// Wait out the UX delay, then request one prediction.
    ///
    /// Every failure (transport, non-2xx status, oversized or malformed body)
    /// collapses into [`RequestFailed`] after the cause is logged. No retry.
    pub fn predict(&self, input: &MeasurementInput) -> Result<PredictionResponse, RequestFailed> {
        if !self.ux_delay.is_zero() {
            thread::sleep(self.ux_delay);
        }
        tracing::info!(
            endpoint = %self.endpoint,
            criteria = %input.criteria,
            percentage = input.percentage,
            salt_count = input.salt_count,
            "Requesting prediction"
        );
        match api::post_prediction(&self.agent, &self.endpoint, input, self.max_response_bytes) {
            Ok(response) => {
                tracing::info!(
                    prediction = %response.prediction,
                    risk_level = %response.risk_level,
                    "Prediction received"
                );
                Ok(response)
            }
            Err(err) => {
                tracing::error!(endpoint = %self.endpoint, error = %err, "Prediction request failed");
                Err(RequestFailed)
            }
        }
    }
}
