pub mod config;
pub mod error;

pub use config::{Config, ReplConfig, TokenizerConfig};
pub use error::ConfigError;
