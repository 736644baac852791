use super::{LoadError, LoadedDocument};
use crate::tokenize::Tokenizer;
use std::path::Path;

/// Read a UTF-8 text file, rejecting empty or whitespace-only content.
pub fn load_file_safe(path: &str) -> Result<String, LoadError> {
    if !Path::new(path).exists() {
        return Err(LoadError::FileNotFound(path.into()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_string()));
    }

    Ok(content)
}

/// Load and tokenize a plain text file.
pub fn load(path: &str, tokenizer: &Tokenizer) -> Result<LoadedDocument, LoadError> {
    let content = load_file_safe(path)?;

    Ok(LoadedDocument {
        tokens: tokenizer.tokenize(&content),
        source: format!("text:{}", path),
    })
}
