//! The find-locations operation.
//!
//! Stages: validate input → resolve language → tokenize → flatten every
//! sentence's token forms into one ordered sequence for the whole text →
//! run the location finder with the caller's candidate entities and empty
//! grouping hints → project each ranked hit through the backing dictionary.
//!
//! Flattening discards sentence segmentation deliberately: location
//! mentions may span sentence-internal boundaries in the source formats
//! this operation supports.

use std::sync::Arc;

use crate::components::{LocationsDictionary, LocationsFinder};
use crate::error::Result;
use crate::ops::excerpt;
use crate::registry::ResourceRegistry;
use crate::resolver::{check_text, LanguageResolver};
use crate::response::ResolvedLocation;
use crate::types::{CandidateEntity, LanguageCode};

pub struct FindLocations {
    registry: Arc<ResourceRegistry>,
    resolver: LanguageResolver,
    finder: Arc<dyn LocationsFinder>,
    dictionary: Arc<dyn LocationsDictionary>,
}

impl FindLocations {
    pub fn new(
        registry: Arc<ResourceRegistry>,
        resolver: LanguageResolver,
        finder: Arc<dyn LocationsFinder>,
        dictionary: Arc<dyn LocationsDictionary>,
    ) -> Self {
        Self {
            registry,
            resolver,
            finder,
            dictionary,
        }
    }

    /// Find the locations mentioned in `text`, biased by the caller's
    /// candidate entities. Returns a ranked list with dictionary metadata.
    pub fn run(
        &self,
        text: &str,
        lang: Option<&LanguageCode>,
        candidates: &[CandidateEntity],
    ) -> Result<Vec<ResolvedLocation>> {
        check_text(text)?;

        let lang = self.resolver.resolve(text, lang, &self.registry)?;
        let sentences = self.registry.tokenizer(&lang)?.tokenize(text);
        let tokens: Vec<String> = sentences
            .iter()
            .flat_map(|sentence| sentence.tokens.iter().map(|t| t.form.clone()))
            .collect();

        tracing::debug!(
            lang = %lang,
            text = %excerpt(text, 50),
            "searching for locations mentioned in the text"
        );

        let best = self.finder.find(&tokens, candidates, &[], &[]);

        Ok(best
            .into_iter()
            .filter_map(|hit| match self.dictionary.get(&hit.id) {
                Some(record) => Some(ResolvedLocation {
                    confidence: hit.confidence,
                    location: record.clone(),
                }),
                None => {
                    tracing::debug!(id = %hit.id, "location id not in dictionary, skipped");
                    None
                }
            })
            .collect())
    }
}
