//! Response assembly: boundary records produced toward the formatting
//! layer, plus the tabular projection of parsed sentences.
//!
//! Field names on the wire (`startAt`, `endAt`, `lang`, ...) follow the
//! external contract; everything here is plain data with serde derives.

use serde::Serialize;
use serde_json::Map;

use crate::components::extractor::IntentScore;
use crate::components::locations::LocationRecord;
use crate::types::{AnnotatedSentence, Sentence};

/// Column filler for absent values in the tabular parse format.
pub const EMPTY_FILLER: &str = "_";

// ─── Tokenize ────────────────────────────────────────────────────────────────

/// One token of the tokenize response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    pub form: String,
    #[serde(rename = "startAt")]
    pub start_at: usize,
    #[serde(rename = "endAt")]
    pub end_at: usize,
}

/// One sentence of the tokenize response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceRecord {
    #[serde(rename = "startAt")]
    pub start_at: usize,
    #[serde(rename = "endAt")]
    pub end_at: usize,
    pub tokens: Vec<TokenRecord>,
}

impl From<&Sentence> for SentenceRecord {
    fn from(sentence: &Sentence) -> Self {
        Self {
            start_at: sentence.start,
            end_at: sentence.end,
            tokens: sentence
                .tokens
                .iter()
                .map(|t| TokenRecord {
                    form: t.form.clone(),
                    start_at: t.start,
                    end_at: t.end,
                })
                .collect(),
        }
    }
}

// ─── Parse ───────────────────────────────────────────────────────────────────

/// Structured parse response: the source language code alongside the
/// annotated sentence list.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResponse {
    pub lang: String,
    pub sentences: Vec<AnnotatedSentence>,
}

/// Resolve a governor id to the 1-based position of the governing token
/// within the same sentence, or 0 when the token is root or the governor is
/// absent. Ids are not guaranteed contiguous, so this is a position lookup,
/// never arithmetic on the raw id.
pub fn head_position(sentence: &AnnotatedSentence, governor: Option<usize>) -> usize {
    governor
        .and_then(|gov| sentence.tokens.iter().position(|t| t.id == gov))
        .map(|index| index + 1)
        .unwrap_or(0)
}

/// Render annotated sentences in the line-oriented tabular format: one row
/// per token, tab-separated columns `position`, `form`, `lemma`, `pos`,
/// `pos2`, `head`, `deps`, sentences separated by a blank line, trailing
/// newline. The lemma and secondary-POS columns are always the filler: the
/// annotation layers carry neither, the columns exist for shape
/// compatibility with CoNLL consumers.
pub fn to_tabular(sentences: &[AnnotatedSentence]) -> String {
    let mut blocks = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let mut lines = Vec::with_capacity(sentence.tokens.len());
        for (index, token) in sentence.tokens.iter().enumerate() {
            let form = token.form.as_deref().unwrap_or(EMPTY_FILLER);
            let pos = if token.pos.is_empty() {
                EMPTY_FILLER.to_owned()
            } else {
                token.pos.join("|")
            };
            let deps = if token.dependencies.is_empty() {
                EMPTY_FILLER.to_owned()
            } else {
                token.dependencies.join("|")
            };
            lines.push(format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                index + 1,
                form,
                EMPTY_FILLER,
                pos,
                EMPTY_FILLER,
                head_position(sentence, token.governor),
                deps
            ));
        }
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n") + "\n"
}

// ─── Extract frames ──────────────────────────────────────────────────────────

/// Intent result for one sentence under one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentRecord {
    pub intent: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Vec<ScoredIntentRecord>>,
}

/// One entry of a score distribution, already sorted by descending score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredIntentRecord {
    pub intent: String,
    pub score: f64,
}

impl From<IntentScore> for ScoredIntentRecord {
    fn from(scored: IntentScore) -> Self {
        Self {
            intent: scored.intent,
            score: scored.score,
        }
    }
}

/// One result section: a domain name and one intent record per input
/// sentence, input order preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainFrames {
    pub domain: String,
    pub sentences: Vec<IntentRecord>,
}

/// The aggregated frame-extraction response. Sections follow extractor
/// registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrameResponse {
    pub sections: Vec<DomainFrames>,
}

impl FrameResponse {
    /// Project into a JSON object keyed by domain name, preserving section
    /// order (`serde_json` is built with `preserve_order`).
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let mut map = Map::with_capacity(self.sections.len());
        for section in &self.sections {
            map.insert(
                section.domain.clone(),
                serde_json::to_value(&section.sentences)?,
            );
        }
        Ok(serde_json::Value::Object(map))
    }
}

// ─── Find locations ──────────────────────────────────────────────────────────

/// One resolved location with its metadata drawn from the dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub confidence: f64,
    #[serde(flatten)]
    pub location: LocationRecord,
}

// ─── JSON helpers ────────────────────────────────────────────────────────────

/// Serialize a boundary record to a JSON string. Pretty output carries a
/// trailing newline so it prints cleanly on a terminal; compact output
/// leaves newline handling to the transport layer.
pub fn json_string<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)? + "\n")
    } else {
        serde_json::to_string(value)
    }
}
