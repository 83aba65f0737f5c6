//! Farm area constraints.
//!
//! A farm declares a total area, an arable area and a vegetation
//! (preservation) area, all in hectares. The two partial areas together
//! must fit inside the total.
//!
//! # Example
//!
//! ```rust
//! use brain_agro::farm::*;
//!
//! assert!(validate_farm_area(100.0, 60.0, 40.0).is_valid);
//!
//! let err = assert_valid_farm_area(100.0, -1.0, 10.0).unwrap_err();
//! assert_eq!(err.to_string(), "Arable area cannot be negative");
//! ```

mod area;

pub use area::{
    FarmAreaValidation, FarmAreaViolation, assert_valid_farm_area, assert_valid_farm_area_decimal,
    check_farm_area, check_farm_area_decimal, validate_farm_area, validate_farm_area_decimal,
};
