//! Interactive line-oriented shell over one client's board.
//!
//! Each line is split shell-style (single and double quotes, backslash
//! escapes) and parsed with the same grammar as the one-shot CLI. Errors are
//! printed and the loop carries on; only `exit`, `quit` or end of input stop
//! it. Session events from the background recheck are printed as they arrive.

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{Mutex, mpsc};

use crate::commands::{App, Command};
use crate::storage::Storage;
use crate::watch::SessionEvent;

const PROMPT: &str = "reportvoice> ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
    #[error("trailing backslash")]
    TrailingEscape,
}

#[derive(Parser, Debug)]
#[command(name = "reportvoice", no_binary_name = true, disable_version_flag = true)]
struct ShellInput {
    #[command(subcommand)]
    command: Command,
}

/// What one input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    Blank,
    Exit,
    Run(Command),
    /// Parse failure or help text, printed as-is.
    Message(String),
}

/// Split a line into arguments the way a POSIX shell would for plain words.
///
/// # Errors
///
/// Returns [`SplitError`] for an unclosed quote or a dangling backslash.
pub fn split_args(line: &str) -> Result<Vec<String>, SplitError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') => match chars.next() {
                Some(next @ ('"' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => return Err(SplitError::TrailingEscape),
            },
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, '\\') => {
                current.push(chars.next().ok_or(SplitError::TrailingEscape)?);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(SplitError::UnterminatedQuote(q));
    }
    if in_word {
        args.push(current);
    }
    Ok(args)
}

#[must_use]
pub fn parse_line(line: &str) -> ShellLine {
    let args = match split_args(line) {
        Ok(args) => args,
        Err(e) => return ShellLine::Message(format!("error: {e}")),
    };
    match args.first().map(String::as_str) {
        None => ShellLine::Blank,
        Some("exit" | "quit") => ShellLine::Exit,
        Some(_) => match ShellInput::try_parse_from(args) {
            Ok(input) => ShellLine::Run(input.command),
            Err(e) => ShellLine::Message(e.to_string().trim_end().to_owned()),
        },
    }
}

/// Run the shell until exit or end of input.
///
/// # Errors
///
/// Returns an I/O error only if reading input or writing output fails.
pub async fn run<S, R, W>(
    app: Arc<Mutex<App<S>>>,
    input: R,
    output: &mut W,
    mut events: mpsc::Receiver<SessionEvent>,
) -> std::io::Result<()>
where
    S: Storage,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                output.write_all(format!("\n* {}\n", event.message()).as_bytes()).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    output.write_all(b"\n").await?;
                    break;
                };
                let reply = match parse_line(&line) {
                    ShellLine::Blank => continue,
                    ShellLine::Exit => break,
                    ShellLine::Message(msg) => msg,
                    ShellLine::Run(command) => match app.lock().await.execute(command) {
                        Ok(out) => out,
                        Err(e) => format!("error: {e}"),
                    },
                };
                output.write_all(reply.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
        }
    }
    output.flush().await
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
