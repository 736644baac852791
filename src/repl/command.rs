/// Commands that can be parsed from REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the shell
    Quit,

    /// Show help information
    Help,

    /// Load a UTF-8 text file
    LoadFile(String),

    /// Tokenize the line itself
    Tokenize(String),

    /// Unknown/invalid command
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Type a sentence to tokenize it.
  @<path>     tokenize a UTF-8 text file; paths with spaces are not
              supported, @ followed by spaced words is read as a sentence
  :h, :help   show this help
  :q, :quit   exit";
