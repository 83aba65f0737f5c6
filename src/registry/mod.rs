//! Create/update payload checks for producers, farms and harvests.
//!
//! Each `validate_*` function reports every problem it finds, keyed by
//! field, so a handler can return them all in one response.
//!
//! # Example
//!
//! ```rust
//! use brain_agro::registry::*;
//!
//! let input = ProducerInput {
//!     document: "111.444.777-35".into(),
//!     name: "João da Silva".into(),
//! };
//! assert!(validate_producer(&input).is_empty());
//!
//! let producer = input.into_producer().unwrap();
//! assert_eq!(producer.document.as_str(), "11144477735");
//! ```

mod types;
mod validation;

pub use types::*;
pub use validation::*;
