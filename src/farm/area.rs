use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The first area rule a farm breaks.
///
/// `Display` yields the user-facing message that handlers return as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FarmAreaViolation {
    #[error("Total area must be greater than 0")]
    NonPositiveTotal,

    #[error("Arable area cannot be negative")]
    NegativeArable,

    #[error("Vegetation area cannot be negative")]
    NegativeVegetation,

    /// Both areas are rendered with two decimals, e.g. "110.00".
    #[error("Sum of arable and vegetation areas ({sum} ha) exceeds total area ({total} ha)")]
    ExceedsTotal { sum: String, total: String },
}

impl FarmAreaViolation {
    /// Payload field the violation is reported on. An excess is reported
    /// on the total, the one field both partial areas are measured against.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveTotal | Self::ExceedsTotal { .. } => "total_area",
            Self::NegativeArable => "arable_area",
            Self::NegativeVegetation => "vegetation_area",
        }
    }
}

/// Outcome of [`validate_farm_area`].
///
/// Serializes as `{"isValid":true}` or `{"isValid":false,"error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmAreaValidation {
    /// Whether all area rules hold.
    pub is_valid: bool,
    /// If not valid, the message of the first rule that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Option<FarmAreaViolation>> for FarmAreaValidation {
    fn from(violation: Option<FarmAreaViolation>) -> Self {
        Self {
            is_valid: violation.is_none(),
            error: violation.map(|v| v.to_string()),
        }
    }
}

/// Numeric types areas can be expressed in.
trait Hectares: Copy + PartialOrd {
    const ZERO: Self;

    /// `Err` carries the rendered sum when it cannot be represented exactly.
    fn exact_sum(self, other: Self) -> Result<Self, String>;

    fn two_decimals(self) -> String;
}

impl Hectares for f64 {
    const ZERO: Self = 0.0;

    fn exact_sum(self, other: Self) -> Result<Self, String> {
        Ok(self + other)
    }

    /// Falls back to `{:.2}` outside the `Decimal` range (and for NaN/inf).
    fn two_decimals(self) -> String {
        match Decimal::from_f64_retain(self) {
            Some(d) => d.two_decimals(),
            None => format!("{self:.2}"),
        }
    }
}

impl Hectares for Decimal {
    const ZERO: Self = Decimal::ZERO;

    fn exact_sum(self, other: Self) -> Result<Self, String> {
        let Some(sum) = self.checked_add(other) else {
            return Err(format!("> {}", Decimal::MAX.two_decimals()));
        };
        // Past 28 significant digits addition rounds instead of failing.
        if sum.checked_sub(self) == Some(other) && sum.checked_sub(other) == Some(self) {
            Ok(sum)
        } else {
            Err(sum.two_decimals())
        }
    }

    /// Ties round away from zero, like JavaScript's `toFixed(2)`.
    fn two_decimals(self) -> String {
        let rounded = self.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

/// Rules are checked in order and the first failure wins. The negated
/// comparisons also send NaN to the matching rule.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn check<H: Hectares>(total: H, arable: H, vegetation: H) -> Option<FarmAreaViolation> {
    if !(total > H::ZERO) {
        return Some(FarmAreaViolation::NonPositiveTotal);
    }
    if !(arable >= H::ZERO) {
        return Some(FarmAreaViolation::NegativeArable);
    }
    if !(vegetation >= H::ZERO) {
        return Some(FarmAreaViolation::NegativeVegetation);
    }

    // No tolerance: a sum equal to the total passes, anything above fails.
    // A sum that cannot be held exactly is treated as exceeding.
    let sum = match arable.exact_sum(vegetation) {
        Ok(sum) if sum > total => sum.two_decimals(),
        Ok(_) => return None,
        Err(rendered) => rendered,
    };
    Some(FarmAreaViolation::ExceedsTotal {
        sum,
        total: total.two_decimals(),
    })
}

/// Return the first area rule the farm breaks, if any.
pub fn check_farm_area(
    total_area: f64,
    arable_area: f64,
    vegetation_area: f64,
) -> Option<FarmAreaViolation> {
    check(total_area, arable_area, vegetation_area)
}

/// Validate farm areas (hectares).
///
/// 1. total area must be greater than 0
/// 2. arable area must not be negative
/// 3. vegetation area must not be negative
/// 4. arable + vegetation must not exceed the total
///
/// Only the first failing rule is reported. Plain floating-point
/// comparison is used, so `0.1 + 0.2` against a total of `0.3` fails.
/// Use [`validate_farm_area_decimal`] when exact boundaries matter.
pub fn validate_farm_area(
    total_area: f64,
    arable_area: f64,
    vegetation_area: f64,
) -> FarmAreaValidation {
    check(total_area, arable_area, vegetation_area).into()
}

/// Like [`validate_farm_area`], but fails with the violation instead of
/// returning a result object.
pub fn assert_valid_farm_area(
    total_area: f64,
    arable_area: f64,
    vegetation_area: f64,
) -> Result<(), FarmAreaViolation> {
    match check(total_area, arable_area, vegetation_area) {
        Some(violation) => {
            debug!(
                total_area,
                arable_area,
                vegetation_area,
                error = %violation,
                "farm area rejected"
            );
            Err(violation)
        }
        None => Ok(()),
    }
}

/// [`check_farm_area`] over exact decimals.
pub fn check_farm_area_decimal(
    total_area: Decimal,
    arable_area: Decimal,
    vegetation_area: Decimal,
) -> Option<FarmAreaViolation> {
    check(total_area, arable_area, vegetation_area)
}

/// [`validate_farm_area`] over exact decimals.
pub fn validate_farm_area_decimal(
    total_area: Decimal,
    arable_area: Decimal,
    vegetation_area: Decimal,
) -> FarmAreaValidation {
    check(total_area, arable_area, vegetation_area).into()
}

/// [`assert_valid_farm_area`] over exact decimals.
pub fn assert_valid_farm_area_decimal(
    total_area: Decimal,
    arable_area: Decimal,
    vegetation_area: Decimal,
) -> Result<(), FarmAreaViolation> {
    match check(total_area, arable_area, vegetation_area) {
        Some(violation) => {
            debug!(
                %total_area,
                %arable_area,
                %vegetation_area,
                error = %violation,
                "farm area rejected"
            );
            Err(violation)
        }
        None => Ok(()),
    }
}
