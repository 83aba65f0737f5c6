//! CPF (Cadastro de Pessoas Físicas), the 11-digit individual taxpayer ID.
//!
//! Layout: 9 base digits followed by 2 check digits, displayed as
//! `XXX.XXX.XXX-YY`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DocumentError, all_same, digit_values, strip_non_digits};

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

const BASE_LEN: usize = CPF_LEN - 2;

/// Check whether `input` is a valid CPF.
///
/// Punctuation is ignored. Returns `false` for wrong lengths, for
/// repeated-digit sequences such as "111.111.111-11", and for check digit
/// mismatches.
pub fn validate_cpf(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CPF_LEN || all_same(&digits) {
        return false;
    }
    check_digits(&digits[..BASE_LEN]) == [digits[9], digits[10]]
}

/// Punctuate an 11-digit CPF as `XXX.XXX.XXX-YY`.
///
/// Does not validate the check digits. Input that does not strip to
/// 11 digits is returned unchanged.
pub fn format_cpf(input: &str) -> String {
    let d = strip_non_digits(input);
    if d.len() != CPF_LEN {
        return input.to_string();
    }
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// Remove every non-digit character. No validation is performed.
pub fn strip_cpf_formatting(input: &str) -> String {
    strip_non_digits(input)
}

/// Compute the two check digits for a 9-digit CPF base.
///
/// Punctuation in `base` is ignored. Returns `None` unless it strips
/// to exactly 9 digits.
pub fn cpf_check_digits(base: &str) -> Option<[u8; 2]> {
    let digits = digit_values(base);
    (digits.len() == BASE_LEN).then(|| check_digits(&digits))
}

fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; BASE_LEN + 1];
    extended[..BASE_LEN].copy_from_slice(base);
    extended[BASE_LEN] = first;
    [first, check_digit(&extended)]
}

/// Weights run from `len + 1` down to 2; a remainder of 10 maps to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    match sum * 10 % 11 {
        10 => 0,
        r => r as u8,
    }
}

/// A validated CPF, stored as its 11 bare digits.
///
/// Serializes to the bare digits; deserializing validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse a CPF with or without punctuation.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        if validate_cpf(input) {
            Ok(Self(strip_non_digits(input)))
        } else {
            Err(DocumentError::InvalidCpf(input.to_string()))
        }
    }

    /// The 11 digits, no punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The punctuated form, `XXX.XXX.XXX-YY`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
