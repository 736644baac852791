/// Half-open byte interval `[begin, end)` into the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.begin..self.end]
    }
}

/// A word-level token produced by the tokenizer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    /// Byte offset of the token in the normalized text.
    pub start: usize,
    /// End byte offset (exclusive); `text == normalized[start..end]`.
    pub end: usize,
}

impl Token {
    /// Copies `text[start..end]` into a new token.
    pub fn from_range(text: &str, start: usize, end: usize) -> Self {
        Self {
            text: text[start..end].to_string(),
            start,
            end,
        }
    }
}
