//! Brazilian taxpayer documents: CPF (individuals) and CNPJ (companies).
//!
//! The free functions mirror the predicate style used by request handlers
//! and form schemas: they accept any string, strip punctuation, and answer
//! with a `bool` or a reformatted string. They never fail.
//!
//! The [`Cpf`], [`Cnpj`] and [`Document`] types carry a *validated* document
//! as bare digits, ready to persist.
//!
//! # Example
//!
//! ```rust
//! use brain_agro::document::*;
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert!(!validate_cpf("123.456.789-00"));
//! assert_eq!(strip_cnpj_formatting("11.222.333/0001-81"), "11222333000181");
//!
//! let doc = Document::parse("11.222.333/0001-81").unwrap();
//! assert_eq!(doc.kind(), DocumentKind::Cnpj);
//! assert_eq!(doc.as_str(), "11222333000181");
//! ```

mod cnpj;
mod cpf;
mod dispatch;

pub use cnpj::{
    CNPJ_LEN, Cnpj, cnpj_check_digits, format_cnpj, strip_cnpj_formatting, validate_cnpj,
};
pub use cpf::{CPF_LEN, Cpf, cpf_check_digits, format_cpf, strip_cpf_formatting, validate_cpf};
pub use dispatch::{Document, DocumentKind, detect_kind, is_valid_document};

use thiserror::Error;

/// Error returned when a document cannot be turned into a [`Cpf`],
/// [`Cnpj`] or [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The digit count is neither 11 (CPF) nor 14 (CNPJ).
    #[error("must be a valid CPF or CNPJ")]
    UnknownLength { digits: usize },

    /// Wrong length, repeated digits or check digit mismatch.
    #[error("invalid CPF '{0}'")]
    InvalidCpf(String),

    #[error("invalid CNPJ '{0}'")]
    InvalidCnpj(String),
}

/// Keep ASCII digits only.
fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Numeric values of the ASCII digits in `input`, punctuation skipped.
fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Sequences like "00000000000" satisfy the checksum and are still invalid.
fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}
