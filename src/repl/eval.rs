use super::command::HELP_TEXT;
use super::ReplCommand;
use crate::input::{self, LoadedDocument};
use crate::tokenize::{Token, Tokenizer};

/// Result of running one REPL command
#[derive(Debug, Clone, PartialEq)]
pub enum ReplOutcome {
    Tokens(LoadedDocument),
    Help,
    Quit,
    Failed(String),
}

/// Run a parsed command against the tokenizer.
///
/// Load failures become `Failed` so the loop can keep going.
pub fn evaluate(command: ReplCommand, tokenizer: &Tokenizer) -> ReplOutcome {
    match command {
        ReplCommand::Quit => ReplOutcome::Quit,
        ReplCommand::Help => ReplOutcome::Help,
        ReplCommand::Tokenize(text) => ReplOutcome::Tokens(LoadedDocument {
            tokens: tokenizer.tokenize(&text),
            source: "input".to_string(),
        }),
        ReplCommand::LoadFile(path) => match input::load_path(&path, tokenizer) {
            Ok(document) => ReplOutcome::Tokens(document),
            Err(err) => ReplOutcome::Failed(err.to_string()),
        },
        ReplCommand::Unknown(text) if text.is_empty() => {
            ReplOutcome::Failed("Empty input. Type :h for help.".to_string())
        }
        ReplCommand::Unknown(text) => {
            ReplOutcome::Failed(format!("Unknown command: {}. Type :h for help.", text))
        }
    }
}

/// Render tokens as quoted strings separated by spaces, optionally with
/// their byte offsets.
pub fn format_tokens(tokens: &[Token], show_offsets: bool) -> String {
    tokens
        .iter()
        .map(|token| {
            if show_offsets {
                format!("{:?}@{}..{}", token.text, token.start, token.end)
            } else {
                format!("{:?}", token.text)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl ReplOutcome {
    /// Text to print for this outcome; `None` means the shell should exit.
    pub fn render(&self, show_offsets: bool) -> Option<String> {
        match self {
            ReplOutcome::Tokens(document) => Some(format_tokens(&document.tokens, show_offsets)),
            ReplOutcome::Help => Some(HELP_TEXT.to_string()),
            ReplOutcome::Failed(message) => Some(format!("error: {}", message)),
            ReplOutcome::Quit => None,
        }
    }
}
