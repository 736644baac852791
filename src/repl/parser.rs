use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `@filename` → Load file command, as long as the name has no whitespace
/// - Any other text, including `@` followed by spaced words → Tokenize command
/// - Empty input or unknown `:word` command → Unknown
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    // Check for empty input first
    if input.is_empty() {
        return ReplCommand::Unknown(input.to_string());
    }

    // Handle system commands starting with ':'
    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            _ if cmd.chars().all(|c| c.is_ascii_alphabetic()) => {
                ReplCommand::Unknown(input.to_string())
            }
            // `:)`, `:-D` and friends are text, not commands
            _ => ReplCommand::Tokenize(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim_start();
        if filename.is_empty() || filename.contains(char::is_whitespace) {
            ReplCommand::Tokenize(input.to_string())
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Tokenize(input.to_string())
    }
}
