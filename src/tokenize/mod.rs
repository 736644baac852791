//! Sentence tokenization pipeline.
//!
//! `normalize` → `mask_all` → `scan` → `post_process`. Each stage is a pure
//! function; [`Tokenizer`] only carries the validated configuration.

pub mod mask;
pub mod normalize;
pub mod patterns;
pub mod post;
pub mod scan;
pub mod token;

pub use mask::{mask, mask_all};
pub use normalize::normalize;
pub use post::post_process;
pub use scan::scan;
pub use token::{Span, Token};

use tracing::trace;

use crate::engine::config::TokenizerConfig;
use crate::engine::error::ConfigError;

/// Splits sentences into word-level tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Creates a tokenizer, rejecting fillers that would shift byte offsets
    /// or introduce boundaries.
    pub fn new(config: TokenizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenizes `text`. Token texts and offsets refer to the normalized text.
    #[tracing::instrument(level = "trace", skip(self, text), fields(len = text.len()))]
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = normalize(text);
        let masked = mask_all(&normalized, &self.config);
        let spans = scan(&normalized, &masked);
        let tokens = post_process(&spans, &normalized);
        trace!(spans = spans.len(), tokens = tokens.len(), "tokenized");
        tokens
    }

    /// Tokenizes `text` and returns only the token strings.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}

/// Tokenizes `text` with the default configuration.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(text: &str) -> Vec<String> {
        Tokenizer::default().tokenize_to_strings(text)
    }

    #[test]
    fn test_tokenize_sentence() {
        assert_eq!(
            words("Hello, world! How are you?"),
            vec!["Hello", ",", "world", "!", "How", "are", "you", "?"]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_only_punctuation() {
        assert_eq!(words("?!"), vec!["?", "!"]);
        assert_eq!(words("..."), vec!["..."]);
    }

    #[test]
    fn test_negation_inside_sentence() {
        assert_eq!(words("I don't know."), vec!["I", "do", "n't", "know", "."]);
    }

    #[test]
    fn test_punctuation_after_clitic_dropped() {
        assert_eq!(words("don't! go"), vec!["do", "n't", "go"]);
        assert_eq!(words("John's, x"), vec!["J", "ohn's", "x"]);
    }

    #[test]
    fn test_negation_at_end_of_input() {
        assert_eq!(words("don't"), vec!["don't"]);
    }

    #[test]
    fn test_possessive_inside_sentence() {
        assert_eq!(words("John's book"), vec!["J", "ohn's", "book"]);
        assert_eq!(words("I'm here"), vec!["I", "'m", "here"]);
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(words("etc."), vec!["etc", "."]);
        assert_eq!(words("U.S."), vec!["U.S."]);
        assert_eq!(words("He lives in the U.S."), vec!["He", "lives", "in", "the", "U.S."]);
    }

    #[test]
    fn test_terminator_after_non_ascii_letter() {
        assert_eq!(words("\u{e9}te."), vec!["\u{e9}te", "."]);
        assert_eq!(words("3rd."), vec!["3rd."]);
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(words("well-known"), vec!["well", "-", "known"]);
        assert_eq!(words("x - y"), vec!["x", "- ", "y"]);
        assert_eq!(words("wait -"), vec!["wait"]);
    }

    #[test]
    fn test_emoticon_preserved() {
        assert_eq!(words("hi :) bye"), vec!["hi", ":)", "bye"]);
        assert_eq!(words("love it <3"), vec!["love", "it", "<3"]);
        assert_eq!(words("so (^_^) yes"), vec!["so", "(^_^)", "yes"]);
    }

    #[test]
    fn test_link_preserved() {
        assert_eq!(
            words("see http://a.com/x now"),
            vec!["see", "http://a.com/x", "now"]
        );
        assert_eq!(
            words("Go to www.example.com, then stop."),
            vec!["Go", "to", "www.example.com", ",", "then", "stop", "."]
        );
    }

    #[test]
    fn test_repeated_link() {
        assert_eq!(
            words("a.com/x or a.com/x"),
            vec!["a.com/x", "or", "a.com/x"]
        );
    }

    #[test]
    fn test_masking_disabled() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            mask_emoticons: false,
            ..TokenizerConfig::default()
        })
        .unwrap();
        assert_eq!(
            tokenizer.tokenize_to_strings("hi :) bye"),
            vec!["hi", ":", ")", "bye"]
        );
    }

    #[test]
    fn test_invalid_filler_rejected() {
        let result = Tokenizer::new(TokenizerConfig {
            filler: ' ',
            ..TokenizerConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::InvalidFiller(' '))));
    }

    #[test]
    fn test_typographic_input() {
        assert_eq!(
            words("\u{201c}Hi,\u{201d} she said \u{2014} twice."),
            vec!["\"", "Hi", ",", "\"", "she", "said", "- ", "twice", "."]
        );
    }

    #[test]
    fn test_entities_decoded_before_scanning() {
        assert_eq!(words("Tom &amp; Jerry"), vec!["Tom", "&", "Jerry"]);
    }

    #[test]
    fn test_token_offsets_point_into_normalized_text() {
        let text = "Caf\u{e9} &amp; cr\u{e8}me!";
        let normalized = normalize(text);
        for token in tokenize(text) {
            assert_eq!(&normalized[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            words("Привет, мир! ಠ_ಠ"),
            vec!["Привет", ",", "мир", "!", "ಠ_ಠ"]
        );
    }
}
