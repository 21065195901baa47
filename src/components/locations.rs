//! Location resolution seam: the finder and its backing dictionary.

use serde::Serialize;

use crate::types::CandidateEntity;

/// A gazetteer entry: names and metadata for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    /// Location class, e.g. "city", "region", "country".
    pub kind: String,
    /// ISO code of the country this location belongs to, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude/longitude, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

/// Read-only lookup of location metadata by id.
pub trait LocationsDictionary: Send + Sync {
    fn get(&self, id: &str) -> Option<&LocationRecord>;
}

/// One ranked hit produced by the finder: the dictionary id of the resolved
/// location, its confidence, and the span of token indices it covers in the
/// flattened token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct BestLocation {
    pub id: String,
    pub confidence: f64,
    pub token_range: (usize, usize),
}

/// Resolves location mentions over a whole text's flattened token forms.
///
/// Sentence boundaries are deliberately not part of this interface:
/// mentions may span them in the source formats this operation supports.
pub trait LocationsFinder: Send + Sync {
    /// Rank the best locations for `tokens`, biased by caller-supplied
    /// `candidates`. The grouping hints are reserved shape; the
    /// orchestrator passes them empty.
    fn find(
        &self,
        tokens: &[String],
        candidates: &[CandidateEntity],
        coordinate_groups: &[Vec<String>],
        ambiguity_groups: &[Vec<String>],
    ) -> Vec<BestLocation>;
}
