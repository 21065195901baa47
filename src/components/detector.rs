//! Language detection seam.

use crate::types::LanguageCode;

/// Detects the language of free text. Optional collaborator: when no
/// detector is configured and no language hint is given, resolution fails
/// with `LanguageDetectionUnavailable` rather than guessing.
pub trait LanguageDetector: Send + Sync {
    /// The most likely language of `text`. The returned code is still
    /// subject to the registry support check.
    fn detect(&self, text: &str) -> LanguageCode;
}
