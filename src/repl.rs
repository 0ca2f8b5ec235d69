//! Interactive and file drivers around the lexer.
//!
//! Both drivers scan a whole buffer, print one formatted line per token and
//! report `Invalid` tokens as diagnostics. Lines starting with `:` in the
//! REPL are commands rather than source.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
    rc::Rc,
};

use tracing::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{token_to_string, Token, TokenKind},
    },
    render_error, Position,
};

pub const PROMPT: &str = "$ ";
pub const BANNER: &str = "Llambda Interpreter:";
pub const FAREWELL: &str = "Bye bye...";
pub const HELP: &str = "Commands:
    :exit - Exit the REPL
    :help - Display this message
    :quit - Quit the REPL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Quit,
    Help,
}

impl Command {
    /// Parse a REPL line. Returns `None` when the line is source, not a command.
    pub fn parse(line: &str) -> Option<Result<Command, Error>> {
        let name = line.strip_prefix(':')?.trim_end();

        Some(match name {
            "exit" => Ok(Command::Exit),
            "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            _ => Err(Error::new(
                ErrorImpl::UnknownCommand {
                    command: name.to_string(),
                },
                Position::null(),
            )),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub fn run_command(command: &Command, out: &mut impl Write) -> io::Result<Flow> {
    debug!(?command, "running command");

    match command {
        Command::Exit | Command::Quit => {
            writeln!(out, "{}", FAREWELL)?;
            Ok(Flow::Stop)
        }
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            Ok(Flow::Continue)
        }
    }
}

/// Scan `source` to the end, writing each token to `out` and a diagnostic
/// for every invalid token to `err`.
pub fn run_source(
    source: &str,
    file: Rc<String>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Vec<Token>> {
    let mut tokens = Vec::new();

    for token in Lexer::new(source) {
        writeln!(out, "{}", token_to_string(source, &token))?;

        if let Some(error) = Error::from_invalid_token(source, &token, Rc::clone(&file)) {
            write!(err, "{}", render_error(&error, source))?;
        }

        tokens.push(token);
    }

    let invalid = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Invalid)
        .count();
    debug!(file = %file, tokens = tokens.len(), invalid, "scanned source");

    Ok(tokens)
}

/// Read lines from `input` until end of input or `:exit`/`:quit`.
pub fn repl(input: &mut impl BufRead, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    let file = Rc::new(String::from("shell"));

    writeln!(out, "{}\n", BANNER)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match Command::parse(&line) {
            Some(Ok(command)) => {
                if run_command(&command, out)? == Flow::Stop {
                    return Ok(());
                }
            }
            Some(Err(error)) => {
                if let ErrorImpl::UnknownCommand { command } = error.get_error() {
                    writeln!(out, "Error: Unknown command {}", command)?;
                }
            }
            None => {
                run_source(&line, Rc::clone(&file), out, err)?;
            }
        }
    }
}

/// Scan a whole file once. Returns `false` if the file could not be read.
pub fn run_file(path: &Path, out: &mut impl Write, err: &mut impl Write) -> bool {
    let path_name = path.display().to_string();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(io_error) => {
            warn!(path = %path_name, error = %io_error, "failed to read source file");
            let error = Error::new(
                ErrorImpl::FileNotAccessible {
                    path: path_name.clone(),
                },
                Position::null(),
            );
            if let Err(write_error) = writeln!(out, "{}", error.get_tip()) {
                warn!(error = %write_error, "failed to report unreadable file");
            }
            return false;
        }
    };

    match run_source(&source, Rc::new(path_name), out, err) {
        Ok(_) => true,
        Err(io_error) => {
            warn!(error = %io_error, "failed to write token dump");
            false
        }
    }
}
