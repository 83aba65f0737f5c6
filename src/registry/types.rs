use serde::{Deserialize, Serialize};

use crate::core::AgroError;
use crate::document::Document;

use super::validation::check_producer;

/// Producer payload as received from a form or API request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProducerInput {
    /// CPF or CNPJ, with or without punctuation.
    pub document: String,
    pub name: String,
}

/// A producer that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Producer {
    /// Stored as bare digits.
    pub document: Document,
    pub name: String,
}

impl ProducerInput {
    /// Validate and convert into a [`Producer`].
    ///
    /// The name is trimmed and the document is stripped of punctuation.
    pub fn into_producer(self) -> Result<Producer, AgroError> {
        match check_producer(&self) {
            (Some(document), errors) if errors.is_empty() => Ok(Producer {
                document,
                name: self.name.trim().to_string(),
            }),
            (_, errors) => Err(AgroError::Validation(errors)),
        }
    }
}

/// Farm payload. Areas are in hectares.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmInput {
    pub name: String,
    pub city: String,
    /// Two-letter UF code, e.g. "MT".
    pub state: String,
    pub total_area: f64,
    pub arable_area: f64,
    pub vegetation_area: f64,
}

/// Harvest (safra) payload, e.g. "Safra 2024".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarvestInput {
    pub name: String,
    pub year: i32,
}
