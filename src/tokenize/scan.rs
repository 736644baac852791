//! Codepoint scanner that turns masked text into byte-offset spans.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use super::patterns::{CONTRACTION, NEGATION};
use super::token::Span;

/// Punctuation that ends a span. `.` and `'` never do on their own.
fn is_boundary_punctuation(c: char) -> bool {
    c != '.' && c != '\'' && c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Byte offset of the end of the first codepoint of `candidate`.
fn first_char_width(candidate: &str) -> usize {
    candidate.chars().next().map_or(0, char::len_utf8)
}

/// Byte offset, relative to `candidate`, of the codepoint just before its
/// first apostrophe. Falls back to 0 when nothing precedes the apostrophe.
fn negation_split(candidate: &str) -> usize {
    let apostrophe = candidate.find('\'').unwrap_or(0);
    candidate[..apostrophe]
        .char_indices()
        .next_back()
        .map_or(0, |(at, _)| at)
}

/// Splits `text` into spans, using `masked` to decide where boundaries fall.
///
/// Both strings must have the same byte length, and every non-filler byte in
/// `masked` must equal the byte at the same offset in `text`.
///
/// Candidates ending at a boundary get the clitic rules applied:
/// - a contraction (`'s`, `'ll`, ...) splits one character after the
///   candidate start;
/// - a negation (`n't`) splits one character before the first apostrophe.
///
/// A punctuation boundary gets its own one-character span only when the
/// candidate was not split. After a split the boundary character is dropped.
///
/// The trailing candidate after the last boundary is emitted as is.
pub fn scan(text: &str, masked: &str) -> Vec<Span> {
    debug_assert_eq!(text.len(), masked.len());

    let mut spans = Vec::new();
    let mut i = 0;

    for (j, c) in masked.char_indices() {
        let space = c.is_whitespace();
        let punct = is_boundary_punctuation(c);
        if !space && !punct {
            continue;
        }

        let candidate = &text[i..j];
        if CONTRACTION.is_match(candidate) {
            let split = i + first_char_width(candidate);
            spans.push(Span::new(i, split));
            spans.push(Span::new(split, j));
        } else if NEGATION.is_match(candidate) {
            let split = i + negation_split(candidate);
            spans.push(Span::new(i, split));
            spans.push(Span::new(split, j));
        } else {
            spans.push(Span::new(i, j));
            if punct {
                spans.push(Span::new(j, j + c.len_utf8()));
            }
        }

        i = j + c.len_utf8();
    }

    spans.push(Span::new(i, text.len()));
    spans
}
