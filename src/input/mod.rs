use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::tokenize::{Token, Tokenizer};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub tokens: Vec<Token>,
    pub source: String,
}

/// Load a UTF-8 text file and tokenize its whole content.
pub fn load_path(path: &str, tokenizer: &Tokenizer) -> Result<LoadedDocument, LoadError> {
    let document = text::load(path, tokenizer)?;

    debug!(
        source = %document.source,
        tokens = document.tokens.len(),
        "loaded document"
    );
    Ok(document)
}

pub mod text;
