//! # brain-agro
//!
//! Domain validators for the Brain Agriculture rural producer registry:
//! Brazilian taxpayer documents (CPF and CNPJ) and farm area constraints.
//!
//! Everything here is a pure function over in-memory values. API handlers
//! and form schemas call the same functions, so server-side and client-side
//! checks agree.
//!
//! ## Quick Start
//!
//! ```rust
//! use brain_agro::document::*;
//! use brain_agro::farm::*;
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert!(validate_cnpj("11.222.333/0001-81"));
//! assert_eq!(format_cpf("11144477735"), "111.444.777-35");
//!
//! let result = validate_farm_area(100.0, 80.0, 30.0);
//! assert!(!result.is_valid);
//! assert_eq!(
//!     result.error.as_deref(),
//!     Some("Sum of arable and vegetation areas (110.00 ha) exceeds total area (100.00 ha)")
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Error types, field validation errors, Brazilian state codes |
//! | `document` (default) | CPF / CNPJ validation, formatting, typed documents |
//! | `farm` (default) | Farm area validation (`f64` and `Decimal`) |
//! | `registry` | Producer, farm and harvest payload validation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "document")]
pub mod document;

#[cfg(feature = "farm")]
pub mod farm;

#[cfg(feature = "registry")]
pub mod registry;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
