//! Token dump driver.
//!
//! Scans a source file (or a built-in sample program) and prints one
//! `type: .. value: ..` line per token.

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use pascal_lexer::{display_error, lexer::lexer::tokenize};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SAMPLE_PROGRAM: &str = "\
program Main;

procedure Alpha(a : integer; b : integer);
var x : integer;

   procedure Beta(a : integer; b : integer);
   var x : integer;
   begin
      x := a * 10 + b * 2;
   end;

begin
   x := (a + b ) * 2;

   Beta(5, 10);      { procedure call }
end;

begin { Main }

   Alpha(3 + 5, 7);  { procedure call }

end.  { Main }
";

/// Print the token stream of a Pascal-like source file
#[derive(Parser, Debug)]
#[command(name = "pascal-lex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of a Pascal-like source file", long_about = None)]
struct Cli {
    /// Source file to scan (default: a built-in sample program)
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "PASCAL_LEX_VERBOSE")]
    verbose: bool,

    /// Do not print the trailing END_OF_INPUT token
    #[arg(long)]
    no_eof: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

fn read_source(file: Option<&PathBuf>) -> Result<(String, String)> {
    match file {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        None => Ok((String::from(SAMPLE_PROGRAM), String::from("<sample>"))),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (source, file_name) = read_source(cli.file.as_ref())?;
    info!("scanning {}", file_name);

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            eprintln!("{}", error);
            return Ok(ExitCode::FAILURE);
        }
    };

    for token in tokens.iter().filter(|t| !(cli.no_eof && t.is_eof())) {
        token.debug();
    }

    debug!("printed {} tokens", tokens.len());
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    run(cli)
}
