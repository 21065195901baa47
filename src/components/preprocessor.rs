//! Sentence preprocessing seam.
//!
//! A preprocessor converts the tokenizer's base sentence into the parsing
//! shape, layering morphological analyses onto the base token identity.
//! Languages without a registered morpho-preprocessor fall back to
//! [`BasePreprocessor`]; the fallback is resource-level policy, not an
//! error path.

use crate::types::{BaseSentence, ParsingSentence, ParsingToken};

/// Converts a base sentence into the parser's input shape.
pub trait SentencePreprocessor: Send + Sync {
    fn convert(&self, sentence: BaseSentence) -> ParsingSentence;
}

/// Identity preprocessor: wraps each base token with no morphology.
///
/// The documented fallback for every language without a per-language
/// override.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasePreprocessor;

impl SentencePreprocessor for BasePreprocessor {
    fn convert(&self, sentence: BaseSentence) -> ParsingSentence {
        ParsingSentence {
            id: sentence.id,
            tokens: sentence
                .tokens
                .into_iter()
                .map(|base| ParsingToken {
                    base,
                    morphologies: Vec::new(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sentence, Token};

    #[test]
    fn test_base_preprocessor_is_identity_on_tokens() {
        let sentence = Sentence {
            tokens: vec![Token::new("Hola", 0, 4), Token::new("mundo", 5, 10)],
            start: 0,
            end: 10,
        };
        let converted = BasePreprocessor.convert(BaseSentence::from_sentence(0, &sentence));

        assert_eq!(converted.id, 0);
        assert_eq!(converted.tokens.len(), 2);
        assert_eq!(converted.tokens[0].base.form, "Hola");
        assert!(converted.tokens[0].morphologies.is_empty());
        assert_eq!(converted.tokens[1].base.id, 1);
    }
}
