//! Language resolution policy.
//!
//! Decides which language code governs a request, in this order:
//!
//! 1. a forced hint, verified against the registry support check;
//! 2. otherwise the configured detector's answer, verified the same way;
//! 3. otherwise `LanguageDetectionUnavailable` — a configuration error,
//!    deliberately distinct from "unsupported language".
//!
//! Empty or whitespace-only text fails with `EmptyInput` before any
//! resolution or tokenization is attempted.

use std::sync::Arc;

use crate::components::LanguageDetector;
use crate::error::{NlpError, Result};
use crate::registry::ResourceRegistry;
use crate::types::LanguageCode;

/// Fail fast on empty or blank input. Every free-text operation calls this
/// before resolving the language or touching the registry.
pub fn check_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(NlpError::EmptyInput);
    }
    Ok(())
}

/// Resolves the governing language for a request. The detector is an
/// optional collaborator, held as an option-typed field rather than a
/// nullable checked ad hoc at call sites.
#[derive(Clone, Default)]
pub struct LanguageResolver {
    detector: Option<Arc<dyn LanguageDetector>>,
}

impl LanguageResolver {
    /// A resolver without a detector: only forced hints resolve.
    pub fn new() -> Self {
        Self { detector: None }
    }

    /// A resolver backed by a language detector.
    pub fn with_detector(detector: impl LanguageDetector + 'static) -> Self {
        Self {
            detector: Some(Arc::new(detector)),
        }
    }

    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }

    /// Resolve the language governing `text`, validating support against
    /// `registry`.
    pub fn resolve(
        &self,
        text: &str,
        forced: Option<&LanguageCode>,
        registry: &ResourceRegistry,
    ) -> Result<LanguageCode> {
        let lang = match forced {
            Some(code) => code.clone(),
            None => match &self.detector {
                Some(detector) => {
                    let detected = detector.detect(text);
                    tracing::debug!(lang = %detected, "language detected");
                    detected
                }
                None => return Err(NlpError::LanguageDetectionUnavailable),
            },
        };

        if !registry.supports(&lang) {
            return Err(NlpError::LanguageNotSupported(lang));
        }
        Ok(lang)
    }
}
