//! Shared error types and Brazilian reference data.
//!
//! The other modules report failures through the types defined here,
//! and the registry checks farm locations against the state code table.

mod error;
mod states;

pub use error::*;
pub use states::{is_known_state_code, state_name};
