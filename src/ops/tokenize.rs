//! The tokenize operation: the minimal instance of the dispatch pattern.
//!
//! Stages: resolve language → tokenizer lookup → tokenize. Exists to
//! validate the per-language dispatch path independent of heavier stages.

use std::sync::Arc;

use crate::error::Result;
use crate::registry::ResourceRegistry;
use crate::resolver::{check_text, LanguageResolver};
use crate::response::SentenceRecord;
use crate::types::LanguageCode;

pub struct Tokenize {
    registry: Arc<ResourceRegistry>,
    resolver: LanguageResolver,
}

impl Tokenize {
    pub fn new(registry: Arc<ResourceRegistry>, resolver: LanguageResolver) -> Self {
        Self { registry, resolver }
    }

    /// Tokenize `text`, forcing the language when `lang` is given.
    pub fn run(&self, text: &str, lang: Option<&LanguageCode>) -> Result<Vec<SentenceRecord>> {
        check_text(text)?;

        let lang = self.resolver.resolve(text, lang, &self.registry)?;
        let sentences = self.registry.tokenizer(&lang)?.tokenize(text);
        tracing::debug!(lang = %lang, sentences = sentences.len(), "text tokenized");

        Ok(sentences.iter().map(SentenceRecord::from).collect())
    }
}
