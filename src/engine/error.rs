use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid mask filler {0:?}: must be a single-byte character that is neither whitespace nor punctuation")]
    InvalidFiller(char),
}
