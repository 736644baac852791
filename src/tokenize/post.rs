//! Turns scanner spans into tokens.

use super::patterns::TERMINATOR;
use super::token::{Span, Token};

/// Builds the final token list from `spans` over `text`.
///
/// A lone `-` span is held back until the next non-empty, non-hyphen span
/// arrives. Everything from the hyphen up to the start of that span becomes
/// one token, whitespace included, so `x - y` yields `- ` and runs like `--`
/// come out joined. A hyphen still pending at the end of input is dropped.
/// Lowercase words ending in a period are split from the period.
pub fn post_process(spans: &[Span], text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(spans.len());
    let mut pending_hyphen: Option<usize> = None;

    for span in spans {
        let raw = span.slice(text);
        let trimmed = raw.trim();

        if !trimmed.is_empty() && trimmed != "-" {
            if let Some(start) = pending_hyphen.take() {
                tokens.push(Token::from_range(text, start, span.begin));
            }
        }

        if TERMINATOR.is_match(trimmed) {
            let end = span.begin + raw.trim_end().len();
            tokens.push(Token::from_range(text, span.begin, end - 1));
            tokens.push(Token::from_range(text, end - 1, end));
        } else if trimmed == "-" {
            if pending_hyphen.is_none() {
                pending_hyphen = Some(span.begin);
            }
        } else if !trimmed.is_empty() {
            tokens.push(Token::from_range(text, span.begin, span.end));
        }
    }

    tokens
}
