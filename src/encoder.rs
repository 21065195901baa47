//! Per-language token encoding chain.
//!
//! A [`TokensEncoder`] wires together one language's preprocessor (base
//! fallback when no override is registered), its word embeddings and its
//! encoder model. Chains are assembled once at registry-build time and
//! cached per language; requests only call [`TokensEncoder::forward`].

use std::sync::Arc;

use crate::components::{EmbeddingsTable, EncoderModel, SentencePreprocessor};
use crate::types::{BaseSentence, BaseToken};

/// The cached encoder chain for one language:
/// preprocessor → embeddings → encoder model.
pub struct TokensEncoder {
    preprocessor: Arc<dyn SentencePreprocessor>,
    embeddings: Arc<EmbeddingsTable>,
    model: Arc<dyn EncoderModel>,
}

impl TokensEncoder {
    pub(crate) fn new(
        preprocessor: Arc<dyn SentencePreprocessor>,
        embeddings: Arc<EmbeddingsTable>,
        model: Arc<dyn EncoderModel>,
    ) -> Self {
        Self {
            preprocessor,
            embeddings,
            model,
        }
    }

    /// Encode one sentence's token forms into per-token numeric encodings.
    ///
    /// The forms pass through the preprocessor's input shape first, so a
    /// morpho-preprocessor sees the same layered sentence it would see in
    /// the parse pipeline.
    pub fn forward(&self, forms: &[String]) -> Vec<Vec<f32>> {
        let sentence = BaseSentence {
            id: 0,
            tokens: forms
                .iter()
                .enumerate()
                .map(|(i, form)| BaseToken {
                    id: i,
                    form: form.clone(),
                    start: 0,
                    end: 0,
                })
                .collect(),
        };
        let parsing = self.preprocessor.convert(sentence);
        let embedded: Vec<Vec<f32>> = parsing
            .tokens
            .iter()
            .map(|token| self.embeddings.get(&token.base.form).to_vec())
            .collect();

        self.model.encode(&embedded)
    }

    pub fn dimension(&self) -> usize {
        self.embeddings.dimension()
    }
}
