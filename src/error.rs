//! Error taxonomy for the orchestration core.
//!
//! Every error kind signals a request or configuration problem, never a
//! transient fault, so none of them is retryable. Each kind carries the
//! offending identifier (language code, domain name, resource kind) and a
//! stable machine-readable code via [`NlpError::code`], so a formatting
//! layer can map kinds to distinct externally visible failure indicators
//! without matching on message strings.

use serde::Serialize;
use thiserror::Error;

use crate::types::LanguageCode;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NlpError>;

/// Errors surfaced at the orchestrator boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NlpError {
    /// The input text is empty or whitespace-only. Raised before any stage
    /// runs, for every operation that accepts free text.
    #[error("input text is empty")]
    EmptyInput,

    /// The resolved (forced or detected) language has no registered
    /// resources for the requested operation.
    #[error("language '{0}' is not supported")]
    LanguageNotSupported(LanguageCode),

    /// No language hint was given and no detector is configured. A
    /// configuration defect, distinct from an unsupported language.
    #[error("cannot determine the language automatically (no language detector configured)")]
    LanguageDetectionUnavailable,

    /// A required per-language resource is absent while the resources that
    /// depend on it are registered (e.g. an encoder model without its
    /// embeddings table). The language may otherwise be partially
    /// supported, so this is kept distinct from `LanguageNotSupported`.
    #[error("missing {kind} for language '{language}'")]
    MissingResource {
        kind: &'static str,
        language: LanguageCode,
    },

    /// The requested frame-extractor domain is not registered.
    #[error("invalid frame extractor domain '{0}'")]
    InvalidDomain(String),
}

impl NlpError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::LanguageNotSupported(_) => "language_not_supported",
            Self::LanguageDetectionUnavailable => "language_detection_unavailable",
            Self::MissingResource { .. } => "missing_resource",
            Self::InvalidDomain(_) => "invalid_domain",
        }
    }

    /// The offending identifier, when the kind carries one.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::EmptyInput | Self::LanguageDetectionUnavailable => None,
            Self::LanguageNotSupported(code) => Some(code.as_str()),
            Self::MissingResource { kind, .. } => Some(*kind),
            Self::InvalidDomain(name) => Some(name.as_str()),
        }
    }

    /// Project this error into the serializable boundary record.
    pub fn to_diagnostic(&self) -> ErrorDiagnostic {
        ErrorDiagnostic {
            code: self.code(),
            identifier: self.identifier().map(str::to_owned),
            message: self.to_string(),
        }
    }
}

/// The externally visible failure record: kind, offending identifier and a
/// human-readable message. No stack-trace-shaped detail.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDiagnostic {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            NlpError::EmptyInput,
            NlpError::LanguageNotSupported(LanguageCode::new("xx")),
            NlpError::LanguageDetectionUnavailable,
            NlpError::MissingResource {
                kind: "embeddings",
                language: LanguageCode::new("en"),
            },
            NlpError::InvalidDomain("travel".into()),
        ];
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(codes.len(), deduped.len());
    }

    #[test]
    fn test_identifier_carries_offender() {
        assert_eq!(
            NlpError::LanguageNotSupported(LanguageCode::new("XX")).identifier(),
            Some("xx")
        );
        assert_eq!(
            NlpError::InvalidDomain("weather".into()).identifier(),
            Some("weather")
        );
        assert_eq!(NlpError::EmptyInput.identifier(), None);
    }

    #[test]
    fn test_diagnostic_serializes_without_identifier() {
        let json = serde_json::to_value(NlpError::EmptyInput.to_diagnostic()).unwrap();
        assert_eq!(json["code"], "empty_input");
        assert!(json.get("identifier").is_none());
    }

    #[test]
    fn test_diagnostic_serializes_with_identifier() {
        let err = NlpError::MissingResource {
            kind: "embeddings",
            language: LanguageCode::new("fr"),
        };
        let json = serde_json::to_value(err.to_diagnostic()).unwrap();
        assert_eq!(json["code"], "missing_resource");
        assert_eq!(json["identifier"], "embeddings");
        assert!(json["message"].as_str().unwrap().contains("fr"));
    }
}
