//! The parse operation.
//!
//! Stages: resolve language → tokenizer lookup → tokenize → preprocessor
//! lookup (base fallback) → per sentence: convert to the preprocessor's
//! input shape, preprocess, parse → collect one annotated sentence per
//! input sentence, input order preserved.
//!
//! Two projections of the same annotated-sentence sequence are supported:
//! a structured record carrying the source language code, and a tabular
//! one-row-per-token format whose head column is resolved by position
//! lookup (raw governor ids are not guaranteed contiguous).

use std::sync::Arc;

use crate::error::Result;
use crate::registry::ResourceRegistry;
use crate::resolver::{check_text, LanguageResolver};
use crate::response::{to_tabular, ParseResponse};
use crate::types::{AnnotatedSentence, BaseSentence, LanguageCode};

/// The projection requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Structured,
    Tabular,
}

/// A parse result in its requested projection.
#[derive(Debug, Clone)]
pub enum ParseOutput {
    Structured(ParseResponse),
    Tabular(String),
}

pub struct Parse {
    registry: Arc<ResourceRegistry>,
    resolver: LanguageResolver,
}

impl Parse {
    pub fn new(registry: Arc<ResourceRegistry>, resolver: LanguageResolver) -> Self {
        Self { registry, resolver }
    }

    /// Parse `text` into the requested projection.
    pub fn run(
        &self,
        text: &str,
        lang: Option<&LanguageCode>,
        format: ResponseFormat,
    ) -> Result<ParseOutput> {
        check_text(text)?;

        let lang = self.resolver.resolve(text, lang, &self.registry)?;
        let annotated = self.parse_sentences(text, &lang)?;

        Ok(match format {
            ResponseFormat::Structured => ParseOutput::Structured(ParseResponse {
                lang: lang.to_string(),
                sentences: annotated,
            }),
            ResponseFormat::Tabular => ParseOutput::Tabular(to_tabular(&annotated)),
        })
    }

    /// Run the annotation chain for an already resolved language.
    fn parse_sentences(&self, text: &str, lang: &LanguageCode) -> Result<Vec<AnnotatedSentence>> {
        let sentences = self.registry.tokenizer(lang)?.tokenize(text);
        let parser = self.registry.parser(lang)?;
        let preprocessor = self.registry.preprocessor(lang);
        tracing::debug!(lang = %lang, sentences = sentences.len(), "parsing sentences");

        Ok(sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                parser.parse(preprocessor.convert(BaseSentence::from_sentence(index, sentence)))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tokenizer::RuleTokenizer;
    use crate::components::DependencyParser;
    use crate::error::NlpError;
    use crate::types::{AnnotatedToken, ParsingSentence};

    /// Toy parser: first token is the root, every other token is governed
    /// by it. Governor carries the raw id of the first token.
    struct HeadInitialParser;

    impl DependencyParser for HeadInitialParser {
        fn parse(&self, sentence: ParsingSentence) -> AnnotatedSentence {
            let root_id = sentence.tokens.first().map(|t| t.base.id);
            AnnotatedSentence {
                id: sentence.id,
                tokens: sentence
                    .tokens
                    .iter()
                    .map(|token| {
                        let is_root = Some(token.base.id) == root_id;
                        AnnotatedToken {
                            id: token.base.id,
                            form: Some(token.base.form.clone()),
                            pos: vec!["X".to_owned()],
                            governor: if is_root { None } else { root_id },
                            dependencies: vec![if is_root { "root" } else { "dep" }.to_owned()],
                        }
                    })
                    .collect(),
            }
        }
    }

    fn op() -> Parse {
        let registry = ResourceRegistry::builder()
            .tokenizer("en", RuleTokenizer)
            .parser("en", HeadInitialParser)
            .build()
            .unwrap();
        Parse::new(Arc::new(registry), LanguageResolver::new())
    }

    fn en() -> LanguageCode {
        LanguageCode::new("en")
    }

    #[test]
    fn test_structured_output_carries_language() {
        let out = op()
            .run("Dogs bark. Cats meow.", Some(&en()), ResponseFormat::Structured)
            .unwrap();
        match out {
            ParseOutput::Structured(response) => {
                assert_eq!(response.lang, "en");
                assert_eq!(response.sentences.len(), 2);
                assert_eq!(response.sentences[0].id, 0);
                assert_eq!(response.sentences[1].id, 1);
            }
            ParseOutput::Tabular(_) => panic!("expected structured output"),
        }
    }

    #[test]
    fn test_tabular_single_token_head_is_zero() {
        let out = op().run("Hello", Some(&en()), ResponseFormat::Tabular).unwrap();
        match out {
            ParseOutput::Tabular(table) => assert_eq!(table, "1\tHello\t_\tX\t_\t0\troot\n"),
            ParseOutput::Structured(_) => panic!("expected tabular output"),
        }
    }

    #[test]
    fn test_tabular_head_points_to_root_position() {
        let out = op()
            .run("Dogs bark loudly", Some(&en()), ResponseFormat::Tabular)
            .unwrap();
        let table = match out {
            ParseOutput::Tabular(table) => table,
            ParseOutput::Structured(_) => panic!("expected tabular output"),
        };
        let lines: Vec<&str> = table.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1\tDogs\t_\tX\t_\t0\troot");
        assert_eq!(lines[1], "2\tbark\t_\tX\t_\t1\tdep");
        assert_eq!(lines[2], "3\tloudly\t_\tX\t_\t1\tdep");
    }

    #[test]
    fn test_parse_empty_input() {
        let err = op()
            .run("", Some(&en()), ResponseFormat::Structured)
            .unwrap_err();
        assert_eq!(err, NlpError::EmptyInput);
    }

    #[test]
    fn test_parse_language_without_parser() {
        // Tokenizer registered but no parser: resolution passes, the parser
        // lookup is the failing stage.
        let registry = ResourceRegistry::builder()
            .tokenizer("fr", RuleTokenizer)
            .build()
            .unwrap();
        let parse = Parse::new(Arc::new(registry), LanguageResolver::new());
        let err = parse
            .run("Bonjour.", Some(&LanguageCode::new("fr")), ResponseFormat::Structured)
            .unwrap_err();
        assert_eq!(err, NlpError::LanguageNotSupported(LanguageCode::new("fr")));
    }
}
