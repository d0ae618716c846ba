//! Wire types and the HTTP exchange with the prediction service.

use serde::{Deserialize, Serialize};

use crate::http_client;

/// Verdict string the service uses for water that is safe to use.
pub const SAFE_PREDICTION: &str = "Safe";

/// Measurements submitted for one prediction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeasurementInput {
    pub criteria: String,
    pub percentage: f64,
    pub salt_count: f64,
}

/// Verdict returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
    pub risk_level: String,
}

impl PredictionResponse {
    /// True only for the exact, case-sensitive `"Safe"` verdict.
    pub fn is_safe(&self) -> bool {
        self.prediction == SAFE_PREDICTION
    }
}

/// Detailed failure of a prediction request, kept for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Server returned HTTP {code}: {detail}")]
    Status { code: u16, detail: String },
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("JSON error: {0}")]
    Json(String),
}

/// POST `input` to `endpoint` and decode the verdict.
pub fn post_prediction(
    agent: &ureq::Agent,
    endpoint: &str,
    input: &MeasurementInput,
    max_response_bytes: usize,
) -> Result<PredictionResponse, PredictError> {
    let request = agent
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match request.send_json(input) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_text(response, max_response_bytes)
                .unwrap_or_else(|err| err.to_string());
            return Err(PredictError::Status {
                code,
                detail: status_detail(&body),
            });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let code = response.status();
    if !(200..300).contains(&code) {
        let body = http_client::read_response_text(response, max_response_bytes)
            .unwrap_or_else(|err| err.to_string());
        return Err(PredictError::Status {
            code,
            detail: status_detail(&body),
        });
    }

    let body = http_client::read_response_text(response, max_response_bytes)
        .map_err(|err| PredictError::Body(err.to_string()))?;
    parse_prediction_response(&body)
}

fn parse_prediction_response(body: &str) -> Result<PredictionResponse, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| PredictError::Json(format!("{err}: {trimmed}")))
}

#[derive(Deserialize)]
struct ErrorBodyWire {
    error: Option<String>,
    message: Option<String>,
}

/// Prefer the service's `error`/`message` field over the raw body.
fn status_detail(body: &str) -> String {
    let trimmed = body.trim();
    serde_json::from_str::<ErrorBodyWire>(trimmed)
        .ok()
        .and_then(|wire| wire.error.or(wire.message))
        .unwrap_or_else(|| trimmed.to_string())
}
