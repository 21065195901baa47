//! Pipeline orchestrators, one per operation family.
//!
//! Each orchestrator holds a shared [`ResourceRegistry`](crate::registry::ResourceRegistry)
//! reference and a [`LanguageResolver`](crate::resolver::LanguageResolver),
//! and executes its stage chain strictly in sequence within one request:
//! resolve → look up resources → run stages, threading each stage's output
//! into the next. Every stage fails fast; no partial results.

pub mod frames;
pub mod locations;
pub mod parse;
pub mod tokenize;

pub use frames::ExtractFrames;
pub use locations::FindLocations;
pub use parse::{Parse, ParseOutput, ResponseFormat};
pub use tokenize::Tokenize;

/// Truncate `text` to at most `max` characters for log lines.
pub(crate) fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("short", 50), "short");
    }

    #[test]
    fn test_excerpt_truncates_on_chars() {
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("ààààà", 2), "àà...");
    }
}
