//! Core data model: language codes, token/sentence spans, and the layered
//! sentence representations flowing through the parse pipeline.
//!
//! Spans are half-open `[start, end)` character offsets into the source
//! text. Token spans within a sentence are non-overlapping and
//! non-decreasing; sentence spans are non-overlapping and non-decreasing
//! across the tokenizer output.
//!
//! Later stages layer annotations onto the base token identity — a
//! [`ParsingToken`] wraps the surface form with morphology, an
//! [`AnnotatedToken`] adds the syntactic relation — never replacing it.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Language code ──────────────────────────────────────────────────────────

/// A normalized ISO 639-1-like language identifier.
///
/// Construction normalizes the raw code (trim + ASCII lowercase) so that
/// `"EN"`, `" en "` and `"en"` all dispatch to the same resources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a normalized language code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

// ─── Tokenizer output ────────────────────────────────────────────────────────

/// A surface token with its half-open character span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub form: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(form: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            form: form.into(),
            start,
            end,
        }
    }
}

/// An ordered sequence of tokens plus the sentence's own character span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    /// The token surface forms, in order.
    pub fn forms(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.form.clone()).collect()
    }
}

// ─── Parse pipeline layers ───────────────────────────────────────────────────

/// Base token identity handed to the preprocessor: the surface form plus an
/// id unique within its sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseToken {
    pub id: usize,
    pub form: String,
    pub start: usize,
    pub end: usize,
}

/// A tokenized sentence in the shape the preprocessor consumes. The id is
/// the sentence's index within the tokenizer output, unique per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSentence {
    pub id: usize,
    pub tokens: Vec<BaseToken>,
}

impl BaseSentence {
    /// Build the preprocessor input shape from a tokenizer sentence.
    pub fn from_sentence(index: usize, sentence: &Sentence) -> Self {
        Self {
            id: index,
            tokens: sentence
                .tokens
                .iter()
                .enumerate()
                .map(|(i, t)| BaseToken {
                    id: i,
                    form: t.form.clone(),
                    start: t.start,
                    end: t.end,
                })
                .collect(),
        }
    }
}

/// A token enriched with the morphological layer. `morphologies` is empty
/// when the base (identity) preprocessor produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingToken {
    pub base: BaseToken,
    pub morphologies: Vec<String>,
}

/// The preprocessor's output and the parser's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingSentence {
    pub id: usize,
    pub tokens: Vec<ParsingToken>,
}

// ─── Parser output ───────────────────────────────────────────────────────────

/// A fully annotated token. `form` is `None` for non-surface-bearing tokens
/// (e.g. traces inserted by the parser); `governor` carries the raw id of
/// the governing token, which is not guaranteed contiguous, so tabular
/// projection resolves it by position lookup within the sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedToken {
    pub id: usize,
    pub form: Option<String>,
    pub pos: Vec<String>,
    pub governor: Option<usize>,
    pub dependencies: Vec<String>,
}

/// One fully annotated sentence, in input order within the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedSentence {
    pub id: usize,
    pub tokens: Vec<AnnotatedToken>,
}

// ─── Location candidates ─────────────────────────────────────────────────────

/// An externally supplied entity used to bias location resolution. Owned by
/// the request and discarded after the response is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEntity {
    pub name: String,
    pub score: f64,
}
