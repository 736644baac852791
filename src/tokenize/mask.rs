//! Hides links and emoticons from the span scanner.
//!
//! Masking replaces matched text with a run of filler bytes of the same
//! length. The scanner only consults the masked copy to decide where
//! boundaries fall, so byte offsets stay valid against the unmasked text and
//! the matched text survives verbatim in the final tokens.

use std::ops::Range;

use regex::Regex;
use tracing::debug;

use super::patterns::{EMOTICON, LINK};
use crate::engine::config::TokenizerConfig;

/// Masks every occurrence of every distinct value matched by `pattern`.
///
/// Values are processed in first-seen order. A value that occurs several
/// times is masked everywhere it occurs, even where the pattern itself would
/// not have matched it. `filler` must be a single-byte character.
pub fn mask(text: &str, pattern: &Regex, filler: char) -> String {
    debug_assert!(filler.is_ascii(), "filler must be one byte wide");

    let mut seen: Vec<&str> = Vec::new();
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for found in pattern.find_iter(text) {
        let value = found.as_str();
        if value.is_empty() || seen.contains(&value) {
            continue;
        }
        seen.push(value);
        ranges.extend(
            text.match_indices(value)
                .map(|(at, _)| at..at + value.len()),
        );
    }

    if ranges.is_empty() {
        return text.to_string();
    }

    debug!(values = seen.len(), ranges = ranges.len(), "masking matches");
    fill(text, merge(ranges), filler)
}

/// Sorts ranges and coalesces the overlapping or touching ones.
fn merge(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Copies `text`, writing `filler` over each byte inside the ranges.
///
/// Every range starts and ends on a char boundary because it came from a
/// match, so whole codepoints are replaced and the copy stays valid UTF-8.
fn fill(text: &str, ranges: Vec<Range<usize>>, filler: char) -> String {
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for range in ranges {
        result.push_str(&text[cursor..range.start]);
        result.extend(std::iter::repeat(filler).take(range.len()));
        cursor = range.end;
    }
    result.push_str(&text[cursor..]);

    result
}

/// Masks links, then emoticons, as enabled by the configuration.
pub fn mask_all(text: &str, config: &TokenizerConfig) -> String {
    let masked = if config.mask_links {
        mask(text, &LINK, config.filler)
    } else {
        text.to_string()
    };

    if config.mask_emoticons {
        mask(&masked, &EMOTICON, config.filler)
    } else {
        masked
    }
}
