//! # sentok
//!
//! Word-level tokenization of English sentences. Handles the cases a plain
//! whitespace and punctuation split gets wrong: contractions (`don't`),
//! sentence-final periods after lowercase words (`etc.`), links and emoticons
//! that contain punctuation, and runs of hyphens.
//!
//! ```rust
//! let words: Vec<String> = sentok::tokenize("see http://a.com/x now :)")
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, ["see", "http://a.com/x", "now", ":)"]);
//! ```

pub mod engine;
pub mod input;
pub mod repl;
pub mod tokenize;

pub use engine::{Config, ConfigError, ReplConfig, TokenizerConfig};
pub use tokenize::{tokenize, Token, Tokenizer};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=sentok=debug` or
/// `RUST_LOG=sentok=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
