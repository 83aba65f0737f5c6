use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::core::{ValidationError, is_known_state_code};
use crate::document::Document;
use crate::farm::check_farm_area;

use super::types::{FarmInput, HarvestInput, ProducerInput};

/// Earliest harvest year accepted.
pub const MIN_HARVEST_YEAR: i32 = 1900;

/// Validate a producer payload.
/// Returns all validation errors found (not just the first).
pub fn validate_producer(input: &ProducerInput) -> Vec<ValidationError> {
    check_producer(input).1
}

/// The parsed document is `None` only when `errors` reports it.
pub(super) fn check_producer(
    input: &ProducerInput,
) -> (Option<Document>, Vec<ValidationError>) {
    let mut errors = Vec::new();

    require_text(&input.name, "name", "producer name", &mut errors);

    // 11 digits routes to CPF, 14 to CNPJ, anything else is rejected
    let document = match Document::parse(&input.document) {
        Ok(document) => Some(document),
        Err(e) => {
            errors.push(ValidationError::new("document", e.to_string()));
            None
        }
    };

    log_rejection("producer", &errors);
    (document, errors)
}

/// Validate a farm payload, including the area rules.
/// Returns all validation errors found (not just the first).
pub fn validate_farm(input: &FarmInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require_text(&input.name, "name", "farm name", &mut errors);
    require_text(&input.city, "city", "city", &mut errors);

    let state = input.state.trim();
    if state.is_empty() {
        errors.push(ValidationError::new("state", "state must not be empty"));
    } else if !is_known_state_code(state) {
        errors.push(ValidationError::new(
            "state",
            format!("unknown state code '{state}'"),
        ));
    }

    if let Some(violation) =
        check_farm_area(input.total_area, input.arable_area, input.vegetation_area)
    {
        errors.push(ValidationError::new(violation.field(), violation.to_string()));
    }

    log_rejection("farm", &errors);
    errors
}

/// Validate a harvest payload.
///
/// The year may be at most one year past `today`, so next season's
/// harvest can be registered ahead of time.
pub fn validate_harvest(input: &HarvestInput, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require_text(&input.name, "name", "harvest name", &mut errors);

    let latest = today.year() + 1;
    if input.year < MIN_HARVEST_YEAR {
        errors.push(ValidationError::new(
            "year",
            format!("harvest year must be {MIN_HARVEST_YEAR} or later, got {}", input.year),
        ));
    } else if input.year > latest {
        errors.push(ValidationError::new(
            "year",
            format!("harvest year {} is after {latest}", input.year),
        ));
    }

    log_rejection("harvest", &errors);
    errors
}

fn require_text(value: &str, field: &str, label: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{label} must not be empty")));
    }
}

fn log_rejection(payload: &str, errors: &[ValidationError]) {
    if !errors.is_empty() {
        debug!(payload, count = errors.len(), "payload rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm() -> FarmInput {
        FarmInput {
            name: "Fazenda Boa Vista".into(),
            city: "Sorriso".into(),
            state: "MT".into(),
            total_area: 1000.0,
            arable_area: 700.0,
            vegetation_area: 300.0,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn valid_farm() {
        assert!(validate_farm(&farm()).is_empty());
    }

    #[test]
    fn state_is_trimmed() {
        let input = FarmInput {
            state: " SP ".into(),
            ..farm()
        };
        assert!(validate_farm(&input).is_empty());
    }

    #[test]
    fn area_violation_reported_on_field() {
        let input = FarmInput {
            vegetation_area: -1.0,
            ..farm()
        };
        let errors = validate_farm(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "vegetation_area");
        assert_eq!(errors[0].message, "Vegetation area cannot be negative");
    }

    #[test]
    fn blank_name_rejected() {
        let input = ProducerInput {
            document: "11144477735".into(),
            name: "   ".into(),
        };
        let errors = validate_producer(&input);
        assert_eq!(
            errors,
            vec![ValidationError::new("name", "producer name must not be empty")]
        );
    }

    #[test]
    fn harvest_year_bounds() {
        let ok = HarvestInput {
            name: "Safra 2025".into(),
            year: 2025,
        };
        assert!(validate_harvest(&ok, today()).is_empty());

        let too_late = HarvestInput { year: 2026, ..ok.clone() };
        assert_eq!(validate_harvest(&too_late, today())[0].field, "year");

        let too_early = HarvestInput { year: 1899, ..ok };
        assert_eq!(validate_harvest(&too_early, today()).len(), 1);
    }
}
