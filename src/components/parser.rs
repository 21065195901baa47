//! Dependency parsing seam.

use crate::types::{AnnotatedSentence, ParsingSentence};

/// A per-language dependency parser. Consumes the preprocessor's output and
/// produces one fully annotated sentence per input sentence.
pub trait DependencyParser: Send + Sync {
    fn parse(&self, sentence: ParsingSentence) -> AnnotatedSentence;
}
