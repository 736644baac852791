//! REPL (Read-Eval-Print Loop) module
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and help text
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes
//! - **eval.rs**: Runs a command against a tokenizer and formats the result
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! use sentok::repl::{evaluate, parse_repl_input};
//!
//! for line in stdin.lock().lines() {
//!     let outcome = evaluate(parse_repl_input(&line?), &tokenizer);
//!     // print outcome
//! }
//! ```

pub mod command;
pub mod eval;
pub mod parser;

// Re-export public types
pub use command::ReplCommand;
pub use eval::{evaluate, format_tokens, ReplOutcome};
pub use parser::parse_repl_input;
