//! Document type identifiers understood by the verification capability.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of identity document to capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Cambodia national ID card.
    #[serde(rename = "idCard")]
    IdCard,
    /// Passport.
    #[serde(rename = "passport")]
    Passport,
}

impl DocumentType {
    pub const ALL: [DocumentType; 2] = [DocumentType::IdCard, DocumentType::Passport];

    /// Identifier used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdCard => "idCard",
            Self::Passport => "passport",
        }
    }

    /// Label shown to a person picking a document.
    pub fn label(&self) -> &'static str {
        match self {
            Self::IdCard => "Cambodia ID Card",
            Self::Passport => "Passport",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document type: {0} (expected idCard or passport)")]
pub struct ParseDocumentTypeError(pub String);

impl FromStr for DocumentType {
    type Err = ParseDocumentTypeError;

    /// Accepts the wire id (`idCard`) or its kebab-case form (`id-card`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idCard" | "id-card" => Ok(Self::IdCard),
            "passport" => Ok(Self::Passport),
            other => Err(ParseDocumentTypeError(other.to_string())),
        }
    }
}
