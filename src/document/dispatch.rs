//! Routing a producer document to CPF or CNPJ by digit count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{CNPJ_LEN, CPF_LEN, Cnpj, Cpf, DocumentError, strip_non_digits};

/// Which registry a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Individual taxpayer (11 digits).
    Cpf,
    /// Company taxpayer (14 digits).
    Cnpj,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        })
    }
}

/// Guess the document kind from the digit count alone.
///
/// No checksum is computed; use [`Document::parse`] for that.
pub fn detect_kind(input: &str) -> Option<DocumentKind> {
    match strip_non_digits(input).len() {
        CPF_LEN => Some(DocumentKind::Cpf),
        CNPJ_LEN => Some(DocumentKind::Cnpj),
        _ => None,
    }
}

/// `true` if `input` is a valid CPF or a valid CNPJ.
pub fn is_valid_document(input: &str) -> bool {
    Document::parse(input).is_ok()
}

/// A validated producer document, either CPF or CNPJ.
///
/// Serializes to the bare digits. Deserializing applies the same
/// dispatch as [`Document::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    /// Parse a document: 11 digits is a CPF, 14 digits is a CNPJ.
    ///
    /// Any other digit count fails with [`DocumentError::UnknownLength`]
    /// ("must be a valid CPF or CNPJ").
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let Some(kind) = detect_kind(input) else {
            let digits = strip_non_digits(input).len();
            trace!(digits, "document rejected: neither CPF nor CNPJ length");
            return Err(DocumentError::UnknownLength { digits });
        };
        trace!(%kind, "document routed");
        match kind {
            DocumentKind::Cpf => Cpf::parse(input).map(Self::Cpf),
            DocumentKind::Cnpj => Cnpj::parse(input).map(Self::Cnpj),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Bare digits, as persisted.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Punctuated display form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            Self::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Document {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Document> for String {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Cpf(cpf) => cpf.into(),
            Document::Cnpj(cnpj) => cnpj.into(),
        }
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}
