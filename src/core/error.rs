use thiserror::Error;

#[cfg(feature = "document")]
use crate::document::DocumentError;
#[cfg(feature = "farm")]
use crate::farm::FarmAreaViolation;

/// Errors returned by the fallible (`Result`-returning) entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AgroError {
    /// One or more payload fields failed validation.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A CPF or CNPJ could not be parsed.
    #[cfg(feature = "document")]
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Farm areas are inconsistent.
    #[cfg(feature = "farm")]
    #[error(transparent)]
    FarmArea(#[from] FarmAreaViolation),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// Name of the invalid payload field (e.g. "state", "arable_area").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field() {
        let e = ValidationError::new("name", "must not be empty");
        assert_eq!(e.to_string(), "name: must not be empty");
    }

    #[test]
    fn validation_variant_joins_all_errors() {
        let err = AgroError::Validation(vec![
            ValidationError::new("name", "must not be empty"),
            ValidationError::new("state", "unknown state code 'XX'"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: name: must not be empty; state: unknown state code 'XX'"
        );
    }

    #[cfg(feature = "farm")]
    #[test]
    fn farm_area_variant_is_transparent() {
        let err = AgroError::from(FarmAreaViolation::NonPositiveTotal);
        assert_eq!(err.to_string(), "Total area must be greater than 0");
    }
}
