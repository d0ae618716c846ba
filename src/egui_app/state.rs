//! Prediction UI state and its transition function.
//!
//! The whole behavior of the form lives in [`transition`]: the controller
//! feeds it events and the renderer only ever reads the resulting model.

use crate::prediction::{FormField, FormFields, PredictionResponse, ValidationError};

/// Editable form contents plus pending focus requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    /// Input to focus on the next frame, set when a submit is rejected.
    pub focus_requested: Option<FormField>,
}

/// Which of the mutually exclusive UI phases is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ResultShown,
    ErrorShown,
}

/// Content of the result panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCard {
    pub prediction: String,
    pub risk_level: String,
}

impl From<PredictionResponse> for ResultCard {
    fn from(response: PredictionResponse) -> Self {
        Self {
            prediction: response.prediction,
            risk_level: response.risk_level,
        }
    }
}

/// Everything the renderer needs to draw the prediction form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionUiModel {
    pub state: UiState,
    /// Last rendered result. Kept while hidden so a dismissed card retains its text.
    pub result: Option<ResultCard>,
    /// Field-level feedback from the most recent rejected submit.
    pub invalid: Option<ValidationError>,
}

/// Inputs that drive [`transition`].
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Submit pressed but the form failed validation.
    SubmitRejected(ValidationError),
    /// Submit pressed with a valid form; a request is about to start.
    SubmitAccepted,
    /// The in-flight request produced a verdict.
    RequestSucceeded(PredictionResponse),
    /// The in-flight request failed for any reason.
    RequestFailed,
    /// The user closed the result panel.
    Dismiss,
}

/// Compute the next model for `event`.
///
/// Submits and dismissals are ignored while loading, and completions are
/// ignored unless a request is in flight.
pub fn transition(model: PredictionUiModel, event: UiEvent) -> PredictionUiModel {
    let loading = model.state == UiState::Loading;
    match event {
        UiEvent::SubmitRejected(error) if !loading => PredictionUiModel {
            state: UiState::Idle,
            invalid: Some(error),
            ..model
        },
        UiEvent::SubmitAccepted if !loading => PredictionUiModel {
            state: UiState::Loading,
            invalid: None,
            ..model
        },
        UiEvent::RequestSucceeded(response) if loading => PredictionUiModel {
            state: UiState::ResultShown,
            result: Some(response.into()),
            invalid: None,
        },
        UiEvent::RequestFailed if loading => PredictionUiModel {
            state: UiState::ErrorShown,
            ..model
        },
        UiEvent::Dismiss if model.state == UiState::ResultShown => PredictionUiModel {
            state: UiState::Idle,
            ..model
        },
        _ => model,
    }
}
