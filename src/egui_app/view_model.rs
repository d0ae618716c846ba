//! Projection from [`PredictionUiModel`] to what is visible on screen.

use crate::egui_app::state::{PredictionUiModel, ResultCard, UiState};
use crate::prediction::api::SAFE_PREDICTION;
use crate::prediction::{CONNECTION_FAILED_MESSAGE, ValidationError};

/// Submit label while idle.
pub const SUBMIT_LABEL: &str = "Predict Water Safety";
/// Submit label while a request is in flight.
pub const SUBMIT_LABEL_BUSY: &str = "Analyzing...";

/// Visual treatment of the result card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusVariant {
    Safe,
    Danger,
}

impl StatusVariant {
    /// Only the exact `"Safe"` verdict is affirmative.
    pub fn for_prediction(prediction: &str) -> Self {
        if prediction == SAFE_PREDICTION {
            Self::Safe
        } else {
            Self::Danger
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Safe => "🛡️",
            Self::Danger => "☣️",
        }
    }
}

/// Result card as drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultPanelView {
    pub prediction: String,
    pub risk_level: String,
    pub variant: StatusVariant,
}

/// Visible state of every element the form owns.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub loader_visible: bool,
    /// `Some` only while the result panel is shown.
    pub result_panel: Option<ResultPanelView>,
    pub error_banner: Option<&'static str>,
    pub field_error: Option<ValidationError>,
}

/// Build the view for `model`.
pub fn prediction_view(model: &PredictionUiModel) -> PredictionView {
    let loading = model.state == UiState::Loading;
    PredictionView {
        submit_enabled: !loading,
        submit_label: if loading { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL },
        loader_visible: loading,
        result_panel: match (model.state, model.result.as_ref()) {
            (UiState::ResultShown, Some(card)) => Some(result_panel(card)),
            _ => None,
        },
        error_banner: (model.state == UiState::ErrorShown).then_some(CONNECTION_FAILED_MESSAGE),
        field_error: model.invalid,
    }
}

/// Text is copied verbatim; the variant is derived fresh from the verdict.
pub fn result_panel(card: &ResultCard) -> ResultPanelView {
    ResultPanelView {
        prediction: card.prediction.clone(),
        risk_level: card.risk_level.clone(),
        variant: StatusVariant::for_prediction(&card.prediction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::state::{UiEvent, transition};
    use crate::prediction::PredictionResponse;

    fn shown(prediction: &str, risk_level: &str) -> PredictionUiModel {
        let loading = transition(PredictionUiModel::default(), UiEvent::SubmitAccepted);
        transition(
            loading,
            UiEvent::RequestSucceeded(PredictionResponse {
                prediction: prediction.to_string(),
                risk_level: risk_level.to_string(),
            }),
        )
    }

    #[test]
    fn idle_view_is_ready_for_input() {
        let view = prediction_view(&PredictionUiModel::default());
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, "Predict Water Safety");
        assert!(!view.loader_visible);
        assert_eq!(view.result_panel, None);
        assert_eq!(view.error_banner, None);
    }

    #[test]
    fn loading_view_disables_submit_and_shows_loader() {
        let model = transition(PredictionUiModel::default(), UiEvent::SubmitAccepted);
        let view = prediction_view(&model);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, "Analyzing...");
        assert!(view.loader_visible);
        assert_eq!(view.result_panel, None);
        assert_eq!(view.error_banner, None);
    }

    #[test]
    fn safe_verdict_uses_safe_variant() {
        let view = prediction_view(&shown("Safe", "Low"));
        let panel = view.result_panel.unwrap();
        assert_eq!(panel.prediction, "Safe");
        assert_eq!(panel.risk_level, "Low");
        assert_eq!(panel.variant, StatusVariant::Safe);
        assert_eq!(panel.variant.icon(), "🛡️");
        assert!(!view.loader_visible);
    }

    #[test]
    fn every_other_verdict_uses_danger_variant() {
        for prediction in ["Unsafe", "Contaminated", "safe", "SAFE", "", "Unknown"] {
            let panel = prediction_view(&shown(prediction, "High"))
                .result_panel
                .unwrap();
            assert_eq!(panel.variant, StatusVariant::Danger, "{prediction:?}");
            assert_eq!(panel.variant.icon(), "☣️");
            assert_eq!(panel.prediction, prediction);
        }
    }

    #[test]
    fn variant_does_not_carry_over_between_results() {
        let danger = shown("Unsafe", "High");
        let again = transition(danger, UiEvent::SubmitAccepted);
        let safe = transition(
            again,
            UiEvent::RequestSucceeded(PredictionResponse {
                prediction: "Safe".into(),
                risk_level: "Moderate".into(),
            }),
        );
        let panel = prediction_view(&safe).result_panel.unwrap();
        assert_eq!(panel.variant, StatusVariant::Safe);
        assert_eq!(panel.risk_level, "Moderate");
    }

    #[test]
    fn error_view_shows_banner_without_result() {
        let loading = transition(shown("Safe", "Low"), UiEvent::SubmitAccepted);
        let failed = transition(loading, UiEvent::RequestFailed);
        let view = prediction_view(&failed);
        assert_eq!(view.error_banner, Some("Connection Failed. Is backend running?"));
        assert_eq!(view.result_panel, None);
        assert!(!view.loader_visible);
        assert!(view.submit_enabled);
    }

    #[test]
    fn dismissed_result_is_hidden() {
        let dismissed = transition(shown("Safe", "Low"), UiEvent::Dismiss);
        assert_eq!(prediction_view(&dismissed).result_panel, None);
        assert_eq!(dismissed.result.unwrap().risk_level, "Low");
    }
}
