//! Water-safety predictions from the remote prediction service.

pub mod api;
pub mod client;
pub mod validation;

pub use api::{MeasurementInput, PredictionResponse};
pub use client::{CONNECTION_FAILED_MESSAGE, PredictionClient, RequestFailed};
pub use validation::{FormField, FormFields, InputLimits, ValidationError, validate_inputs};
