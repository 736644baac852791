//! Typographic and HTML-entity normalization applied before masking.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Literal rewrites, tried in order at every position.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    ("&rsquo;", "'"),
    ("\u{2013}", "-"),
    ("\u{2014}", "-"),
    ("&mdash;", "-"),
    ("&ndash;", "-"),
    ("\r\n", "\n"),
    ("\r", "\n"),
];

/// Named entities that HTML still decodes without a trailing semicolon.
const LEGACY_ENTITIES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig",
    "agrave", "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy",
    "curren", "deg", "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14",
    "frac34", "gt", "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt",
    "macr", "micro", "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf",
    "ordm", "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg",
    "sect", "shy", "sup1", "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc",
    "ugrave", "uml", "uuml", "yacute", "yen", "yuml",
];

lazy_static! {
    /// `&` followed by a numeric reference or an alphanumeric name, plus an
    /// optional `;`.
    static ref ENTITY: Regex =
        Regex::new(r"&(?P<name>#[xX][0-9a-fA-F]+|#[0-9]+|[A-Za-z][A-Za-z0-9]*)(?P<semi>;?)")
            .expect("entity pattern compiles");
}

/// Longest legacy entity name that `name` starts with.
fn legacy_prefix(name: &str) -> Option<&'static str> {
    LEGACY_ENTITIES
        .iter()
        .filter(|legacy| name.starts_with(*legacy))
        .max_by_key(|legacy| legacy.len())
        .copied()
}

/// Adds the `;` that numeric references and legacy named entities may omit,
/// so `&amp b` and `&ampx` decode like `&amp; b` and `&amp;x`.
///
/// A terminated name that already decodes is left alone (`&notin;` stays
/// `&notin;`, it does not become `&not;in;`).
fn terminate_entities(text: &str) -> Cow<'_, str> {
    ENTITY.replace_all(text, |caps: &Captures| {
        let whole = &caps[0];
        let name = &caps["name"];
        let semi = &caps["semi"];

        if name.starts_with('#') {
            return format!("&{name};");
        }
        if !semi.is_empty() && html_escape::decode_html_entities(whole) != whole {
            return whole.to_string();
        }
        match legacy_prefix(name) {
            Some(prefix) => format!("&{prefix};{}{semi}", &name[prefix.len()..]),
            None => whole.to_string(),
        }
    })
}

/// Rewrites curly quotes, dashes and carriage returns to ASCII, left to right
/// without overlapping matches.
fn substitute(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    'outer: while let Some(c) = rest.chars().next() {
        for (from, to) in SUBSTITUTIONS {
            if let Some(tail) = rest.strip_prefix(from) {
                result.push_str(to);
                rest = tail;
                continue 'outer;
            }
        }
        result.push(c);
        rest = &rest[c.len_utf8()..];
    }

    result
}

/// Normalizes raw text: typographic substitutions, then HTML entity decoding.
///
/// Legacy entities written without their semicolon are decoded too. The
/// substitutions run a second time over the decoded text so that
/// entity-encoded quotes (`&ldquo;`, `&#8217;`) end up as ASCII as well.
pub fn normalize(text: &str) -> String {
    let substituted = substitute(text);
    let terminated = terminate_entities(&substituted);
    let decoded = html_escape::decode_html_entities(&terminated);
    substitute(&decoded)
}
