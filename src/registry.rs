//! The process-lifetime resource registry.
//!
//! [`ResourceRegistry`] maps language codes to the resources each operation
//! needs (tokenizer, morpho-preprocessor, encoder chain, parser) and holds
//! the frame extractors keyed by domain. It is built once at startup via
//! [`RegistryBuilder`] and never mutated afterwards: concurrent requests
//! read it through a shared reference without locking.
//!
//! Lookup policy (per resource kind):
//! - tokenizer / parser / encoder: hard requirement, missing entry fails
//!   with `LanguageNotSupported`;
//! - preprocessor: optional per-language override, missing entry falls back
//!   to the base (identity) preprocessor;
//! - embeddings: required by an enabled encoder model, checked at build
//!   time — an encoder without its embedding table cannot run, so `build`
//!   fails with `MissingResource` instead of deferring to request time.
//!
//! Extractor iteration follows registration order. This is an explicit
//! invariant: the fan-out response sections must be deterministic.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::components::{
    BasePreprocessor, DependencyParser, EmbeddingsTable, EncoderModel, FrameExtractor,
    SentencePreprocessor, Tokenizer,
};
use crate::encoder::TokensEncoder;
use crate::error::{NlpError, Result};
use crate::types::LanguageCode;

/// Immutable per-language resource maps plus domain-keyed extractors.
pub struct ResourceRegistry {
    tokenizers: FxHashMap<LanguageCode, Arc<dyn Tokenizer>>,
    preprocessors: FxHashMap<LanguageCode, Arc<dyn SentencePreprocessor>>,
    base_preprocessor: Arc<dyn SentencePreprocessor>,
    parsers: FxHashMap<LanguageCode, Arc<dyn DependencyParser>>,
    encoders: FxHashMap<LanguageCode, TokensEncoder>,
    extractors: Vec<(String, Arc<dyn FrameExtractor>)>,
}

impl ResourceRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Whether any resources are registered for `lang`. The tokenizer map
    /// is the membership authority: every operation starts by tokenizing.
    pub fn supports(&self, lang: &LanguageCode) -> bool {
        self.tokenizers.contains_key(lang)
    }

    /// The languages with a registered tokenizer.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.tokenizers.keys()
    }

    pub fn tokenizer(&self, lang: &LanguageCode) -> Result<&dyn Tokenizer> {
        self.tokenizers
            .get(lang)
            .map(|t| t.as_ref())
            .ok_or_else(|| NlpError::LanguageNotSupported(lang.clone()))
    }

    /// The per-language morpho-preprocessor, or the base (identity)
    /// preprocessor when no override is registered. Never an error path.
    pub fn preprocessor(&self, lang: &LanguageCode) -> &dyn SentencePreprocessor {
        self.preprocessors
            .get(lang)
            .unwrap_or(&self.base_preprocessor)
            .as_ref()
    }

    pub fn parser(&self, lang: &LanguageCode) -> Result<&dyn DependencyParser> {
        self.parsers
            .get(lang)
            .map(|p| p.as_ref())
            .ok_or_else(|| NlpError::LanguageNotSupported(lang.clone()))
    }

    /// The cached encoder chain for `lang`.
    pub fn encoder(&self, lang: &LanguageCode) -> Result<&TokensEncoder> {
        self.encoders
            .get(lang)
            .ok_or_else(|| NlpError::LanguageNotSupported(lang.clone()))
    }

    /// The extractor registered for `domain`.
    pub fn extractor(&self, domain: &str) -> Result<&Arc<dyn FrameExtractor>> {
        self.extractors
            .iter()
            .find(|(name, _)| name == domain)
            .map(|(_, extractor)| extractor)
            .ok_or_else(|| NlpError::InvalidDomain(domain.to_owned()))
    }

    /// All extractors, in registration order.
    pub fn extractors(&self) -> impl Iterator<Item = (&str, &Arc<dyn FrameExtractor>)> {
        self.extractors
            .iter()
            .map(|(name, extractor)| (name.as_str(), extractor))
    }

    pub fn has_extractors(&self) -> bool {
        !self.extractors.is_empty()
    }
}

/// Fluent builder for [`ResourceRegistry`].
///
/// Encoder chains are assembled by [`RegistryBuilder::build`], which is the
/// single place partial configuration is rejected.
#[derive(Default)]
pub struct RegistryBuilder {
    tokenizers: FxHashMap<LanguageCode, Arc<dyn Tokenizer>>,
    preprocessors: FxHashMap<LanguageCode, Arc<dyn SentencePreprocessor>>,
    parsers: FxHashMap<LanguageCode, Arc<dyn DependencyParser>>,
    encoder_models: Vec<(LanguageCode, Arc<dyn EncoderModel>)>,
    embeddings: FxHashMap<LanguageCode, Arc<EmbeddingsTable>>,
    extractors: Vec<(String, Arc<dyn FrameExtractor>)>,
}

impl RegistryBuilder {
    /// Register the tokenizer for `lang`. Registering a language twice
    /// replaces the previous resource.
    pub fn tokenizer(mut self, lang: impl Into<LanguageCode>, t: impl Tokenizer + 'static) -> Self {
        self.tokenizers.insert(lang.into(), Arc::new(t));
        self
    }

    /// Register a morpho-preprocessor override for `lang`.
    pub fn preprocessor(
        mut self,
        lang: impl Into<LanguageCode>,
        p: impl SentencePreprocessor + 'static,
    ) -> Self {
        self.preprocessors.insert(lang.into(), Arc::new(p));
        self
    }

    /// Register the dependency parser for `lang`.
    pub fn parser(
        mut self,
        lang: impl Into<LanguageCode>,
        p: impl DependencyParser + 'static,
    ) -> Self {
        self.parsers.insert(lang.into(), Arc::new(p));
        self
    }

    /// Register the encoder model for `lang`. Requires embeddings for the
    /// same language by `build` time.
    pub fn encoder_model(
        mut self,
        lang: impl Into<LanguageCode>,
        m: impl EncoderModel + 'static,
    ) -> Self {
        let lang = lang.into();
        self.encoder_models.retain(|(code, _)| *code != lang);
        self.encoder_models.push((lang, Arc::new(m)));
        self
    }

    /// Register the word-embeddings table for `lang`.
    pub fn embeddings(mut self, lang: impl Into<LanguageCode>, table: EmbeddingsTable) -> Self {
        self.embeddings.insert(lang.into(), Arc::new(table));
        self
    }

    /// Register a frame extractor under its own domain name. Re-registering
    /// a domain replaces the extractor but keeps its original position, so
    /// fan-out ordering stays stable.
    pub fn extractor(mut self, e: impl FrameExtractor + 'static) -> Self {
        let domain = e.domain().to_owned();
        let extractor: Arc<dyn FrameExtractor> = Arc::new(e);
        match self.extractors.iter_mut().find(|(name, _)| *name == domain) {
            Some(slot) => slot.1 = extractor,
            None => self.extractors.push((domain, extractor)),
        }
        self
    }

    /// Assemble the immutable registry, building one cached encoder chain
    /// per language with an encoder model.
    ///
    /// # Errors
    ///
    /// `MissingResource { kind: "embeddings" }` when a language has an
    /// encoder model but no embeddings table.
    pub fn build(self) -> Result<ResourceRegistry> {
        let base_preprocessor: Arc<dyn SentencePreprocessor> = Arc::new(BasePreprocessor);

        let mut encoders = FxHashMap::default();
        for (lang, model) in self.encoder_models {
            let embeddings = self
                .embeddings
                .get(&lang)
                .cloned()
                .ok_or_else(|| NlpError::MissingResource {
                    kind: "embeddings",
                    language: lang.clone(),
                })?;
            let preprocessor = self
                .preprocessors
                .get(&lang)
                .cloned()
                .unwrap_or_else(|| Arc::clone(&base_preprocessor));
            encoders.insert(lang, TokensEncoder::new(preprocessor, embeddings, model));
        }

        tracing::info!(
            languages = self.tokenizers.len(),
            parsers = self.parsers.len(),
            encoders = encoders.len(),
            domains = self.extractors.len(),
            "resource registry built"
        );

        Ok(ResourceRegistry {
            tokenizers: self.tokenizers,
            preprocessors: self.preprocessors,
            base_preprocessor,
            parsers: self.parsers,
            encoders,
            extractors: self.extractors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tokenizer::RuleTokenizer;
    use crate::components::{FrameOutput, IntentScore};

    struct PassThroughModel;
    impl EncoderModel for PassThroughModel {
        fn encode(&self, embedded: &[Vec<f32>]) -> Vec<Vec<f32>> {
            embedded.to_vec()
        }
    }

    struct NamedExtractor(&'static str);
    impl FrameExtractor for NamedExtractor {
        fn domain(&self) -> &str {
            self.0
        }
        fn forward(&self, _encodings: &[Vec<f32>]) -> FrameOutput {
            FrameOutput {
                intent: "none".into(),
                score: 1.0,
                distribution: vec![IntentScore {
                    intent: "none".into(),
                    score: 1.0,
                }],
            }
        }
    }

    #[test]
    fn test_supported_language_lookups() {
        let registry = ResourceRegistry::builder()
            .tokenizer("en", RuleTokenizer)
            .build()
            .unwrap();

        let en = LanguageCode::new("en");
        assert!(registry.supports(&en));
        assert!(registry.tokenizer(&en).is_ok());
    }

    #[test]
    fn test_unsupported_language_fails_with_code() {
        let registry = ResourceRegistry::builder()
            .tokenizer("en", RuleTokenizer)
            .build()
            .unwrap();

        let xx = LanguageCode::new("xx");
        assert!(!registry.supports(&xx));
        assert_eq!(
            registry.tokenizer(&xx).err().unwrap(),
            NlpError::LanguageNotSupported(xx.clone())
        );
        assert_eq!(
            registry.parser(&xx).err().unwrap(),
            NlpError::LanguageNotSupported(xx)
        );
    }

    #[test]
    fn test_missing_preprocessor_falls_back_to_base() {
        let registry = ResourceRegistry::builder()
            .tokenizer("en", RuleTokenizer)
            .build()
            .unwrap();

        // Lookup is infallible and yields the identity preprocessor.
        let pre = registry.preprocessor(&LanguageCode::new("en"));
        let sentence = crate::types::BaseSentence {
            id: 0,
            tokens: vec![],
        };
        assert!(pre.convert(sentence).tokens.is_empty());
    }

    #[test]
    fn test_encoder_without_embeddings_fails_at_build() {
        let err = ResourceRegistry::builder()
            .tokenizer("en", RuleTokenizer)
            .encoder_model("en", PassThroughModel)
            .build()
            .err()
            .unwrap();

        assert_eq!(
            err,
            NlpError::MissingResource {
                kind: "embeddings",
                language: LanguageCode::new("en"),
            }
        );
    }

    #[test]
    fn test_encoder_with_embeddings_builds() {
        let registry = ResourceRegistry::builder()
            .tokenizer("en", RuleTokenizer)
            .encoder_model("en", PassThroughModel)
            .embeddings("en", EmbeddingsTable::new(4))
            .build()
            .unwrap();

        assert!(registry.encoder(&LanguageCode::new("en")).is_ok());
        assert_eq!(
            registry.encoder(&LanguageCode::new("de")).err().unwrap(),
            NlpError::LanguageNotSupported(LanguageCode::new("de"))
        );
    }

    #[test]
    fn test_extractors_keep_registration_order() {
        let registry = ResourceRegistry::builder()
            .extractor(NamedExtractor("travel"))
            .extractor(NamedExtractor("weather"))
            .extractor(NamedExtractor("alarm"))
            .build()
            .unwrap();

        let domains: Vec<&str> = registry.extractors().map(|(name, _)| name).collect();
        assert_eq!(domains, vec!["travel", "weather", "alarm"]);
    }

    #[test]
    fn test_reregistered_domain_keeps_position() {
        let registry = ResourceRegistry::builder()
            .extractor(NamedExtractor("travel"))
            .extractor(NamedExtractor("weather"))
            .extractor(NamedExtractor("travel"))
            .build()
            .unwrap();

        let domains: Vec<&str> = registry.extractors().map(|(name, _)| name).collect();
        assert_eq!(domains, vec!["travel", "weather"]);
    }

    #[test]
    fn test_unknown_domain_is_invalid() {
        let registry = ResourceRegistry::builder()
            .extractor(NamedExtractor("travel"))
            .build()
            .unwrap();

        assert!(registry.extractor("travel").is_ok());
        assert_eq!(
            registry.extractor("banking").err().unwrap(),
            NlpError::InvalidDomain("banking".into())
        );
    }
}
