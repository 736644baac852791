//! Process-wide pattern tables shared by every tokenizer.
//!
//! All tables are compiled once on first use and never mutated afterwards.

use lazy_static::lazy_static;
use regex::Regex;

/// Link-like substrings: bare domains, `www.` hosts and `http(s)://` URLs.
pub const LINK_PATTERN: &str = concat!(
    r#"(?i)(?:(?:https?://)?(?:[a-z0-9.\-]+|www|[a-z0-9.\-])[.]"#,
    r#"(?:[^\s()<>]+|\((?:[^\s()<>]+|(?:\([^\s()<>]+\)))*\))+"#,
    r#"(?:\((?:[^\s()<>]+|(?:\([^\s()<>]+\)))*\)|[^\s!()\[\]{};:'".,<>?«»“”‘’]))"#,
);

/// Emoticon alternation. Order matters: the first alternative that matches at
/// a position wins, so `:-))` is found before `:-)))`.
pub const EMOTICON_PATTERN: &str = concat!(
    r":>|\._\.|\[-:|:X|\(-_-\)|\(\^_\^\)|:-\}|ಠ_ಠ|¯\\\\\(ツ\)/¯|;\)|O\.o",
    r"|:-\(|\(╯°□°）╯︵┻━┻|:\*|\(-8|\^__\^|8-D|O\.O|\(-;|:-D|=D|v\.v|:o\)",
    r"|=/|-__-|;D|@_@|8\)|:o|</3|:-x|O_O|:-\)\)|\(-:|\(\._\.\)|V\.V|:-\|",
    r"|0\.o|:->|:p|8-\)|:-0|xDD|>\.>|:\(\)|:1|<33|\)-:|:-p|0\.0|<3|><\(\(\(\*>",
    r"|\[:|:-\*|-_-|=\)|;_;|:\(\(|ಠ︵ಠ|:P|:\(|>:\(|o\.o|xD|\):|\(=|:\}",
    r"|:3|;-D|\(¬_¬\)|:-\(\(\(|\(ಠ_ಠ\)|:\)|:0|:-\(\(|v_v|:-\)|o_o|:\)\)",
    r"|\(:|0_0|:\)\)\)|0_o|o_O|o\.O|:\(\(\(|\(\*_\*\)|O_o|:\]|;-\)|\^___\^",
    r"|\(>_<\)|\(o:|:-P|:-\)\)\)|:D|o_0|<333|XDD|=3|:-o|:-3|=\(|:O|o\.0",
    r"|:-X|:\||:-\]|>:o|V_V|\(;|8D|XD|:-/|\^_\^|:-O|<\.<|:/|>\.<|:x|=\|",
);

/// A lowercase word of two or more letters ending in a sentence-final period.
///
/// The leading group is an ASCII word boundary: any character outside
/// `[0-9A-Za-z_]` counts as a non-word character, so `éte.` matches on `te.`.
pub const TERMINATOR_PATTERN: &str = r"(?:^|[^0-9A-Za-z_])[a-z]{2,}\.$";

/// `'s`, `'m`, `'d`, `'ll`, `'re` and `'ve` after a non-space, non-apostrophe character.
pub const CONTRACTION_PATTERN: &str = r"([^' ])'([sS]|[mM]|[dD]|ll|LL|re|RE|ve|VE)";

/// `n't` after a run of non-space, non-apostrophe characters.
pub const NEGATION_PATTERN: &str = r"([^' ]+)(n't|N'T)";

/// Known emoticons, kept for documentation and tests. Matching goes through
/// [`EMOTICON_PATTERN`], which does not cover the backtick variants below.
pub const EMOTICONS: &[&str] = &[
    r":>", r"._.", r"[-:", r":X", r"(-_-)", r"(^_^)", r":-}", r"ಠ_ಠ", r"¯\\(ツ)/¯",
    r";)", r"O.o", r":-(", r"(╯°□°）╯︵┻━┻", r":*", r"(-8", r"^__^", r"8-D", r"O.O",
    r"(-;", r":-D", r"=D", r"v.v", r":o)", r"=/", r"-__-", r";D", r"@_@", r"8)", r":o",
    r"</3", r":-x", r"O_O", r":-))", r"(-:", r"(._.)", r"V.V", r":-|", r"0.o", r":->",
    r":p", r"8-)", r":-0", r"xDD", r">.>", r":()", r":1", r"<33", r")-:", r":-p",
    r"0.0", r":`-(", r"<3", r"><(((*>", r"[:", r":-*", r"-_-", r"=)", r";_;", r":((",
    r"ಠ︵ಠ", r":P", r":(", r">:(", r"o.o", r"xD", r"):", r"(=", r":}", r":3", r";-D",
    r"(¬_¬)", r":-(((", r"(ಠ_ಠ)", r":)", r":0", r":-((", r"v_v", r":-)", r"o_o", r":))",
    r"(:", r"0_0", r":)))", r"0_o", r"o_O", r"o.O", r":(((", r"(*_*)", r"O_o", r":`-)",
    r":]", r";-)", r"^___^", r"(>_<)", r"(o:", r":-P", r":-)))", r":D", r"o_0", r"<333",
    r"XDD", r"=3", r":-o", r":-3", r"=(", r":O", r":`)", r"o.0", r":-X", r":|", r":-]",
    r">:o", r"V_V", r"(;", r"8D", r"XD", r":-/", r"^_^", r":`(", r":-O", r"<.<", r":/",
    r">.<", r":x", r"=|",
];

lazy_static! {
    pub static ref LINK: Regex = Regex::new(LINK_PATTERN).expect("link pattern compiles");
    pub static ref EMOTICON: Regex =
        Regex::new(EMOTICON_PATTERN).expect("emoticon pattern compiles");
    pub static ref TERMINATOR: Regex =
        Regex::new(TERMINATOR_PATTERN).expect("terminator pattern compiles");
    pub static ref CONTRACTION: Regex =
        Regex::new(CONTRACTION_PATTERN).expect("contraction pattern compiles");
    pub static ref NEGATION: Regex =
        Regex::new(NEGATION_PATTERN).expect("negation pattern compiles");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        lazy_static::initialize(&LINK);
        lazy_static::initialize(&EMOTICON);
        lazy_static::initialize(&TERMINATOR);
        lazy_static::initialize(&CONTRACTION);
        lazy_static::initialize(&NEGATION);
    }

    #[test]
    fn test_link_matches_urls() {
        assert_eq!(
            LINK.find("see http://a.com/x now").map(|m| m.as_str()),
            Some("http://a.com/x")
        );
        assert_eq!(
            LINK.find("visit WWW.Example.org.").map(|m| m.as_str()),
            Some("WWW.Example.org")
        );
    }

    #[test]
    fn test_link_ignores_abbreviations() {
        assert!(LINK.find("etc.").is_none());
        assert!(LINK.find("U.S.").is_none());
        assert!(LINK.find("hello world").is_none());
    }

    #[test]
    fn test_emoticon_matches_whole_faces() {
        for face in [":)", "<3", "(^_^)", "ಠ_ಠ", ";-)", "xD"] {
            assert_eq!(
                EMOTICON.find(face).map(|m| m.as_str()),
                Some(face),
                "expected {face} to match whole"
            );
        }
    }

    #[test]
    fn test_emoticon_prefers_earlier_alternative() {
        assert_eq!(EMOTICON.find(":-)))").map(|m| m.as_str()), Some(":-))"));
    }

    #[test]
    fn test_emoticon_list_mostly_matches() {
        let unmatched: Vec<&str> = EMOTICONS
            .iter()
            .copied()
            .filter(|face| !EMOTICON.is_match(face))
            .collect();
        for face in &unmatched {
            assert!(face.contains('`'), "{face} should be matched");
        }
    }

    #[test]
    fn test_terminator() {
        assert!(TERMINATOR.is_match("etc."));
        assert!(TERMINATOR.is_match("end."));
        assert!(!TERMINATOR.is_match("U.S."));
        assert!(!TERMINATOR.is_match("e.g."));
        assert!(!TERMINATOR.is_match("Hello."));
        assert!(!TERMINATOR.is_match("etc"));
    }

    #[test]
    fn test_terminator_word_boundary_is_ascii() {
        assert!(TERMINATOR.is_match("\u{e9}te."));
        assert!(TERMINATOR.is_match("\u{0436}ab."));
        assert!(!TERMINATOR.is_match("3rd."));
        assert!(!TERMINATOR.is_match("x_ab."));
    }

    #[test]
    fn test_contraction_is_unanchored() {
        assert!(CONTRACTION.is_match("John's"));
        assert!(CONTRACTION.is_match("I'm"));
        assert!(CONTRACTION.is_match("THEY'RE"));
        assert!(!CONTRACTION.is_match("'s"));
        assert!(!CONTRACTION.is_match("don't"));
    }

    #[test]
    fn test_negation() {
        assert!(NEGATION.is_match("don't"));
        assert!(NEGATION.is_match("CAN'T"));
        assert!(!NEGATION.is_match("n't"));
        assert!(!NEGATION.is_match("dont"));
    }
}
