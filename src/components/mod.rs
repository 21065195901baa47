//! Collaborator seams.
//!
//! Each trait is one external component consumed through a narrow
//! interface: the numerical behavior behind it is opaque to the
//! orchestration core. Implementations must be `Send + Sync` because the
//! registry that holds them is shared read-only across concurrent requests.

pub mod detector;
pub mod extractor;
pub mod locations;
pub mod parser;
pub mod preprocessor;
pub mod tokenizer;

pub use detector::LanguageDetector;
pub use extractor::{FrameExtractor, FrameOutput, IntentScore};
pub use locations::{BestLocation, LocationRecord, LocationsDictionary, LocationsFinder};
pub use parser::DependencyParser;
pub use preprocessor::{BasePreprocessor, SentencePreprocessor};
pub use tokenizer::{RuleTokenizer, Tokenizer};

use rustc_hash::FxHashMap;

/// A word-embeddings lookup table: surface form to dense vector, with a
/// shared unknown vector for out-of-vocabulary forms.
#[derive(Debug, Clone)]
pub struct EmbeddingsTable {
    dimension: usize,
    table: FxHashMap<String, Vec<f32>>,
    unknown: Vec<f32>,
}

impl EmbeddingsTable {
    /// Create a table with the given vector dimension. Out-of-vocabulary
    /// lookups return the zero vector.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            table: FxHashMap::default(),
            unknown: vec![0.0; dimension],
        }
    }

    /// Insert or replace the vector for a form. The vector is truncated or
    /// zero-padded to the table dimension.
    pub fn insert(&mut self, form: impl Into<String>, mut vector: Vec<f32>) {
        vector.resize(self.dimension, 0.0);
        self.table.insert(form.into(), vector);
    }

    /// Look up a form, falling back to the unknown vector.
    pub fn get(&self, form: &str) -> &[f32] {
        self.table.get(form).map_or(&self.unknown, Vec::as_slice)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// An opaque encoder model: maps per-token embedding vectors to per-token
/// contextual encodings. One model per language; not interchangeable.
pub trait EncoderModel: Send + Sync {
    /// Encode one sentence worth of embedded tokens. Must return one
    /// encoding per input token.
    fn encode(&self, embedded: &[Vec<f32>]) -> Vec<Vec<f32>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeddings_lookup_and_fallback() {
        let mut table = EmbeddingsTable::new(3);
        table.insert("flight", vec![1.0, 2.0, 3.0]);

        assert_eq!(table.get("flight"), &[1.0, 2.0, 3.0]);
        assert_eq!(table.get("unseen"), &[0.0, 0.0, 0.0]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_embeddings_resize_to_dimension() {
        let mut table = EmbeddingsTable::new(4);
        table.insert("short", vec![1.0]);
        table.insert("long", vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(table.get("short"), &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(table.get("long"), &[1.0, 2.0, 3.0, 4.0]);
    }
}
