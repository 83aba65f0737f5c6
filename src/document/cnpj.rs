//! CNPJ (Cadastro Nacional da Pessoa Jurídica), the 14-digit company
//! taxpayer ID.
//!
//! Layout: 8-digit root, 4-digit branch number, 2 check digits, displayed
//! as `XX.XXX.XXX/XXXX-YY`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DocumentError, all_same, digit_values, strip_non_digits};

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

const BASE_LEN: usize = CNPJ_LEN - 2;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check whether `input` is a valid CNPJ.
///
/// Punctuation is ignored. Returns `false` for wrong lengths,
/// repeated-digit sequences and check digit mismatches.
pub fn validate_cnpj(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CNPJ_LEN || all_same(&digits) {
        return false;
    }
    check_digits(&digits[..BASE_LEN]) == [digits[12], digits[13]]
}

/// Punctuate a 14-digit CNPJ as `XX.XXX.XXX/XXXX-YY`.
///
/// Input that does not strip to 14 digits is returned unchanged.
pub fn format_cnpj(input: &str) -> String {
    let d = strip_non_digits(input);
    if d.len() != CNPJ_LEN {
        return input.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

/// Remove every non-digit character. No validation is performed.
pub fn strip_cnpj_formatting(input: &str) -> String {
    strip_non_digits(input)
}

/// Compute the two check digits for a 12-digit CNPJ base.
///
/// Returns `None` unless `base` strips to exactly 12 digits.
pub fn cnpj_check_digits(base: &str) -> Option<[u8; 2]> {
    let digits = digit_values(base);
    (digits.len() == BASE_LEN).then(|| check_digits(&digits))
}

fn check_digits(base: &[u8]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);
    let mut extended = [0u8; BASE_LEN + 1];
    extended[..BASE_LEN].copy_from_slice(base);
    extended[BASE_LEN] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

/// A validated CNPJ, stored as its 14 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse a CNPJ with or without punctuation.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        if validate_cnpj(input) {
            Ok(Self(strip_non_digits(input)))
        } else {
            Err(DocumentError::InvalidCnpj(input.to_string()))
        }
    }

    /// The 14 digits, no punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The punctuated form, `XX.XXX.XXX/XXXX-YY`.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }

    /// The 8-digit company root shared by all branches.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number ("0001" for the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_formatted() {
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(validate_cnpj("11.444.777/0001-61"));
    }

    #[test]
    fn valid_bare() {
        assert!(validate_cnpj("11222333000181"));
    }

    #[test]
    fn wrong_check_digits() {
        assert!(!validate_cnpj("11.222.333/0001-82"));
        assert!(!validate_cnpj("11.222.333/0001-18"));
    }

    #[test]
    fn repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(CNPJ_LEN);
            assert!(!validate_cnpj(&s), "{s} accepted");
        }
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!validate_cnpj(""));
        assert!(!validate_cnpj("1122233300018"));
        assert!(!validate_cnpj("112223330001811"));
        // a valid CPF is not a CNPJ
        assert!(!validate_cnpj("11144477735"));
    }

    #[test]
    fn check_digits_from_base() {
        assert_eq!(cnpj_check_digits("112223330001"), Some([8, 1]));
        assert_eq!(cnpj_check_digits("11.444.777/0001"), Some([6, 1]));
        assert_eq!(cnpj_check_digits("1122233300"), None);
    }

    #[test]
    fn format() {
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
    }

    #[test]
    fn format_wrong_length_passthrough() {
        assert_eq!(format_cnpj("11222333"), "11222333");
        assert_eq!(format_cnpj("11144477735"), "11144477735");
    }

    #[test]
    fn strip() {
        assert_eq!(strip_cnpj_formatting("11.222.333/0001-81"), "11222333000181");
    }

    #[test]
    fn root_and_branch() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.root(), "11222333");
        assert_eq!(cnpj.branch(), "0001");
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!(matches!(
            Cnpj::parse("00.000.000/0000-00"),
            Err(DocumentError::InvalidCnpj(_))
        ));
    }
}
