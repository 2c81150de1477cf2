//! Line-oriented event loop.
//!
//! Each stdin line is one intent. The engine lives for the whole session, so
//! `undo` and `redo` walk back through everything done since the shell opened.

use crate::cli::{Intent, ShellCommand, ShellLine};
use crate::context::CliContext;
use crate::output;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{BufRead, Write};

pub fn run<R: BufRead>(ctx: &mut CliContext, input: R) -> anyhow::Result<()> {
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens = match split_line(line) {
            Ok(tokens) => tokens,
            Err(message) => {
                output::print_error(&message);
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(tokens) {
            Ok(parsed) => parsed.command,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                print!("{}", e.render());
                continue;
            }
            Err(e) => {
                output::print_error(e.render().to_string().trim());
                continue;
            }
        };

        let result = match command {
            ShellCommand::Quit => break,
            ShellCommand::Undo => {
                if ctx.engine_mut().undo() {
                    Ok(None)
                } else {
                    Err(anyhow::anyhow!("Nothing to undo"))
                }
            }
            ShellCommand::Redo => {
                if ctx.engine_mut().redo() {
                    Ok(None)
                } else {
                    Err(anyhow::anyhow!("Nothing to redo"))
                }
            }
            ShellCommand::Intent(Intent::Clear { yes: false }) => {
                let confirmed = confirm(&mut lines, "Clear the board? [y/N] ")?;
                ctx.clear(confirmed)
                    .map(|()| None)
                    .map_err(|e| if confirmed { e } else { anyhow::anyhow!("Clear cancelled") })
            }
            ShellCommand::Intent(intent) => ctx.run(intent),
        };

        match result {
            Ok(task_id) => output::output_success(ctx.report(task_id)),
            Err(e) => output::print_error(&e.to_string()),
        }
        std::io::stdout().flush()?;
    }

    tracing::debug!("Shell closed after {} snapshots", ctx.engine().history().len());
    Ok(())
}

fn confirm<I>(lines: &mut I, prompt: &str) -> anyhow::Result<bool>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    eprint!("{}", prompt);
    std::io::stderr().flush()?;
    match lines.next() {
        Some(answer) => {
            let answer = answer?;
            Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
        }
        None => Ok(false),
    }
}

/// Split a line into words. Single and double quotes group words; a
/// backslash outside single quotes escapes the next character.
fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unclosed quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
