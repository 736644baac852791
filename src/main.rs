use std::io::{self, BufRead, Write};

use sentok::repl::{evaluate, format_tokens, parse_repl_input};
use sentok::{init_tracing, Config, Tokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::default();
    let tokenizer = Tokenizer::new(config.tokenizer.clone())?;

    // Arguments are tokenized as one sentence; no arguments starts the shell
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let tokens = tokenizer.tokenize(&args.join(" "));
        println!("{}", format_tokens(&tokens, config.repl.show_offsets));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", config.repl.prompt)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let outcome = evaluate(parse_repl_input(&line), &tokenizer);
        match outcome.render(config.repl.show_offsets) {
            Some(output) => writeln!(stdout, "{}", output)?,
            None => break,
        }
    }

    Ok(())
}
