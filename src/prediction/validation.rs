//! Constraint checks for the measurement form.
//!
//! Only required/number/range constraints are enforced; anything beyond that
//! is the prediction service's business.

use serde::Deserialize;

use super::api::MeasurementInput;

/// Raw text of the measurement form as the user typed it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub criteria: String,
    pub percentage: String,
    pub salt_count: String,
}

/// Form inputs, in the order they are checked and displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Criteria,
    Percentage,
    SaltCount,
}

impl FormField {
    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Criteria => "Criteria",
            Self::Percentage => "Percentage (%)",
            Self::SaltCount => "Salt count",
        }
    }
}

/// Inclusive bounds for a numeric field. `None` leaves that side open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct FieldRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl FieldRange {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Bounds must be finite and `min` may not exceed `max`.
    pub fn is_well_formed(&self) -> bool {
        let finite = |bound: Option<f64>| bound.is_none_or(f64::is_finite);
        if !finite(self.min) || !finite(self.max) {
            return false;
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    fn check(&self, value: f64) -> Result<(), ViolationKind> {
        if let Some(min) = self.min
            && value < min
        {
            return Err(ViolationKind::BelowMinimum(min));
        }
        if let Some(max) = self.max
            && value > max
        {
            return Err(ViolationKind::AboveMaximum(max));
        }
        Ok(())
    }
}

/// Range constraints for the numeric inputs.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct InputLimits {
    #[serde(default = "default_percentage_range")]
    pub percentage: FieldRange,
    #[serde(default = "default_salt_count_range")]
    pub salt_count: FieldRange,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            percentage: default_percentage_range(),
            salt_count: default_salt_count_range(),
        }
    }
}

fn default_percentage_range() -> FieldRange {
    FieldRange::new(Some(0.0), Some(100.0))
}

fn default_salt_count_range() -> FieldRange {
    FieldRange::new(Some(0.0), None)
}

/// Why a field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ViolationKind {
    #[error("is required.")]
    Required,
    #[error("must be a number.")]
    NotANumber,
    #[error("must be at least {0}.")]
    BelowMinimum(f64),
    #[error("must be at most {0}.")]
    AboveMaximum(f64),
}

/// The first form field that failed its constraints.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("{} {kind}", .field.label())]
pub struct ValidationError {
    pub field: FormField,
    pub kind: ViolationKind,
}

impl ValidationError {
    /// Field-level hint shown beside the offending input.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Check the form and build the request payload from it.
///
/// Fields are checked in display order and the first failure is returned.
pub fn validate_inputs(
    fields: &FormFields,
    limits: &InputLimits,
) -> Result<MeasurementInput, ValidationError> {
    let criteria = fields.criteria.trim();
    if criteria.is_empty() {
        return Err(ValidationError {
            field: FormField::Criteria,
            kind: ViolationKind::Required,
        });
    }
    let percentage = parse_number(&fields.percentage, &limits.percentage)
        .map_err(|kind| ValidationError {
            field: FormField::Percentage,
            kind,
        })?;
    let salt_count = parse_number(&fields.salt_count, &limits.salt_count)
        .map_err(|kind| ValidationError {
            field: FormField::SaltCount,
            kind,
        })?;
    Ok(MeasurementInput {
        criteria: criteria.to_string(),
        percentage,
        salt_count,
    })
}

fn parse_number(raw: &str, range: &FieldRange) -> Result<f64, ViolationKind> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ViolationKind::Required);
    }
    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ViolationKind::NotANumber)?;
    range.check(value)?;
    Ok(value)
}
