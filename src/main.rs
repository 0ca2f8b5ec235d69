use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use llambda::{
    init_tracing,
    repl::{repl, run_file},
};

/// Llambda: dump the tokens of a source file, or lex lines interactively
#[derive(Debug, Parser)]
#[command(name = "llambda")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to tokenize; starts the REPL when omitted
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match cli.path {
        Some(path) => {
            let mut out = BufWriter::new(stdout.lock());
            let ok = run_file(&path, &mut out, &mut stderr.lock());
            if out.flush().is_err() || !ok {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        None => {
            let result = repl(&mut io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock());
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    eprintln!("{error}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
