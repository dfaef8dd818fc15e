use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Evaluate arithmetic expressions: + - * / with parentheses.
///
/// With no expression a prompt is started, one expression per line.
#[derive(Parser, Debug)]
#[command(name = "calc", version)]
struct CalcArgs {
    /// Print the parsed expression next to its value
    #[arg(long)]
    echo: bool,

    /// History file for the interactive prompt [default: ~/.calc_history]
    #[arg(long, value_name = "PATH", conflicts_with = "no_history")]
    history: Option<PathBuf>,

    /// Don't load or save prompt history
    #[arg(long)]
    no_history: bool,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate, words are joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

impl CalcArgs {
    fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        self.history
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".calc_history")))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

mod repl {
    use calcyard::{calculate, CalcError, Calculation, USAGE};
    use rustyline::error::ReadlineError;
    use std::path::Path;
    use tracing::debug;

    pub fn evalexpr(input: &str, echo: bool) -> Result<String, CalcError> {
        if !echo {
            return calculate(input);
        }
        if input.trim().is_empty() {
            return Ok(USAGE.to_string());
        }
        Calculation::run(input).map(|calc| calc.to_string())
    }

    pub fn run(histpath: Option<&Path>, echo: bool) -> anyhow::Result<()> {
        let mut rl = rustyline::DefaultEditor::new()?;
        if let Some(path) = histpath {
            if rl.load_history(path).is_err() {
                debug!(path = %path.display(), "no history yet");
            }
        }
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    match evalexpr(&line, echo) {
                        Ok(result) => println!("{}", result),
                        Err(e) => println!("{}", e.caller_message()),
                    }
                }
            }
        }
        if let Some(path) = histpath {
            rl.save_history(path)?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = CalcArgs::parse();
    init_logging(args.verbose);

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        match repl::evalexpr(&input, args.echo) {
            Ok(result) => println!("{}", result),
            Err(e) => {
                println!("{}", e.caller_message());
                std::process::exit(1);
            }
        }
        return Ok(());
    }
    let histpath = args.history_path();
    repl::run(histpath.as_deref(), args.echo)
}
