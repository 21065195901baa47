//! The extract-frames operation: the most elaborate chain.
//!
//! Stages: resolve language → tokenize → cached encoder chain lookup →
//! resolve the extractor set (one domain, or every registered extractor) →
//! per sentence × extractor: encode token forms, run the extractor forward
//! → aggregate per-domain sections in registration order.
//!
//! Each sentence is encoded once; extractor runs share the encoding
//! read-only, so the fan-out across domains is parallelized with rayon.

use std::cmp::Ordering;
use std::sync::Arc;

use rayon::prelude::*;

use crate::components::FrameExtractor;
use crate::error::Result;
use crate::registry::ResourceRegistry;
use crate::resolver::{check_text, LanguageResolver};
use crate::response::{DomainFrames, FrameResponse, IntentRecord, ScoredIntentRecord};
use crate::types::LanguageCode;

pub struct ExtractFrames {
    registry: Arc<ResourceRegistry>,
    resolver: LanguageResolver,
}

impl ExtractFrames {
    pub fn new(registry: Arc<ResourceRegistry>, resolver: LanguageResolver) -> Self {
        Self { registry, resolver }
    }

    /// Extract frames from `text`, optionally forcing a language and a
    /// domain. With no domain, every registered extractor runs and the
    /// response carries one section per domain, in registration order.
    /// `distribution` (default true, see [`ExtractFrames::run`]) includes
    /// the full per-intent score distribution, sorted by descending score
    /// with ties kept in intent-vocabulary insertion order.
    pub fn run_with_distribution(
        &self,
        text: &str,
        lang: Option<&LanguageCode>,
        domain: Option<&str>,
        distribution: bool,
    ) -> Result<FrameResponse> {
        check_text(text)?;

        let lang = self.resolver.resolve(text, lang, &self.registry)?;
        let sentences = self.registry.tokenizer(&lang)?.tokenize(text);
        let encoder = self.registry.encoder(&lang)?;

        let selected: Vec<(&str, &Arc<dyn FrameExtractor>)> = match domain {
            Some(name) => vec![(name, self.registry.extractor(name)?)],
            None => self.registry.extractors().collect(),
        };
        tracing::debug!(
            lang = %lang,
            sentences = sentences.len(),
            domains = selected.len(),
            "extracting frames"
        );

        // One encoding per sentence, shared read-only by every extractor.
        let encodings: Vec<Vec<Vec<f32>>> = sentences
            .iter()
            .map(|sentence| encoder.forward(&sentence.forms()))
            .collect();

        let sections: Vec<DomainFrames> = selected
            .par_iter()
            .map(|(name, extractor)| DomainFrames {
                domain: (*name).to_owned(),
                sentences: encodings
                    .iter()
                    .map(|encoding| Self::extract_one(extractor.as_ref(), encoding, distribution))
                    .collect(),
            })
            .collect();

        Ok(FrameResponse { sections })
    }

    /// [`run_with_distribution`](Self::run_with_distribution) with the
    /// distribution included, the default behavior.
    pub fn run(
        &self,
        text: &str,
        lang: Option<&LanguageCode>,
        domain: Option<&str>,
    ) -> Result<FrameResponse> {
        self.run_with_distribution(text, lang, domain, true)
    }

    fn extract_one(
        extractor: &dyn FrameExtractor,
        encoding: &[Vec<f32>],
        distribution: bool,
    ) -> IntentRecord {
        let output = extractor.forward(encoding);
        let sorted = if distribution {
            let mut entries = output.distribution;
            // Stable sort: ties keep the extractor's intent insertion order.
            entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            Some(entries.into_iter().map(ScoredIntentRecord::from).collect())
        } else {
            None
        };

        IntentRecord {
            intent: output.intent,
            score: output.score,
            distribution: sorted,
        }
    }
}
