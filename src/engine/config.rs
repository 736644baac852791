// Configuration for the tokenizer and the interactive shell.
// Defaults reproduce the fixed pattern behaviour exactly.

use super::error::ConfigError;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerConfig {
    /// Character written over masked links and emoticons (default 'x').
    /// Must be one byte wide, and neither whitespace nor punctuation.
    pub filler: char,

    /// Keep links in one token (default true)
    pub mask_links: bool,

    /// Keep emoticons in one token (default true)
    pub mask_emoticons: bool,
}

impl TokenizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = self.filler;
        if !c.is_ascii()
            || c.is_whitespace()
            || c.general_category_group() == GeneralCategoryGroup::Punctuation
        {
            return Err(ConfigError::InvalidFiller(c));
        }
        Ok(())
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            filler: 'x',
            mask_links: true,
            mask_emoticons: true,
        }
    }
}

/// Interactive shell configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Prompt printed before each line (default "sentok> ")
    pub prompt: String,

    /// Print byte offsets after each token (default false)
    pub show_offsets: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "sentok> ".to_string(),
            show_offsets: false,
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub repl: ReplConfig,
}
