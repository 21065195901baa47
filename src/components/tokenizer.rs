//! Tokenization seam and the built-in rule-based tokenizer.
//!
//! Offsets are character offsets (not bytes) into the source text, so the
//! built-in tokenizer walks `char`s with a running index.

use crate::types::{Sentence, Token};

/// Splits free text into sentences of tokens with character spans.
///
/// # Contract
///
/// - Sentence spans are non-overlapping and non-decreasing.
/// - Token spans within a sentence are non-overlapping and non-decreasing.
/// - Re-tokenizing the exact substring delimited by a sentence span yields
///   token spans equal to the originals shifted by the sentence start.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Sentence>;
}

/// Rule-based tokenizer: words are maximal runs of alphanumeric characters
/// (apostrophes allowed inside), every other non-whitespace character is a
/// single-character token, and sentences close after `.`, `!`, `?` or `…`.
///
/// Linguistic correctness is not the goal here; span discipline is. The
/// tokenizer is stateless, so the per-sentence idempotence contract holds
/// by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTokenizer;

impl RuleTokenizer {
    fn is_word_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '\''
    }

    fn is_terminator(ch: char) -> bool {
        matches!(ch, '.' | '!' | '?' | '…')
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Sentence> {
        fn flush_word(word: &mut String, word_start: usize, end: usize, tokens: &mut Vec<Token>) {
            if !word.is_empty() {
                tokens.push(Token::new(std::mem::take(word), word_start, end));
            }
        }
        fn close_sentence(tokens: &mut Vec<Token>, sentences: &mut Vec<Sentence>) {
            if !tokens.is_empty() {
                let start = tokens[0].start;
                let end = tokens[tokens.len() - 1].end;
                sentences.push(Sentence {
                    tokens: std::mem::take(tokens),
                    start,
                    end,
                });
            }
        }

        let mut sentences = Vec::new();
        let mut tokens: Vec<Token> = Vec::new();
        let mut word = String::new();
        let mut word_start = 0usize;

        for (i, ch) in text.chars().enumerate() {
            if Self::is_word_char(ch) {
                if word.is_empty() {
                    word_start = i;
                }
                word.push(ch);
            } else {
                flush_word(&mut word, word_start, i, &mut tokens);
                if !ch.is_whitespace() {
                    tokens.push(Token::new(ch.to_string(), i, i + 1));
                    if Self::is_terminator(ch) {
                        close_sentence(&mut tokens, &mut sentences);
                    }
                }
            }
        }
        let total = text.chars().count();
        flush_word(&mut word, word_start, total, &mut tokens);
        close_sentence(&mut tokens, &mut sentences);

        sentences
    }
}
