//! Line-oriented front-end for a [`Session`].

use corrcalc_core::{CorrelationType, ResultView, ValidationError};
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::client::CorrelationClient;
use crate::render;
use crate::session::{Axis, Session};

pub const HELP: &str = "\
Commands:
  x <number>                 add a value to Dataset X
  y <number>                 add a value to Dataset Y
  rm <x|y> <index>           remove a value by position
  type <pearson|spearman|both>
  calc                       calculate correlation
  clear                      empty both datasets
  show                       show datasets and last result
  guide                      how to read coefficients
  help
  quit
";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add { axis: Axis, input: String },
    Remove { axis: Axis, index: usize },
    SetType(CorrelationType),
    Calculate,
    Clear,
    Show,
    Guide,
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(ShellCommand::Empty);
    };
    let rest: Vec<&str> = parts.collect();

    match head.to_ascii_lowercase().as_str() {
        "x" | "y" => {
            let axis = Axis::parse(head).ok_or_else(|| format!("unknown dataset '{}'", head))?;
            if rest.is_empty() {
                return Err(format!("usage: {} <number>", head));
            }
            Ok(ShellCommand::Add {
                axis,
                input: rest.join(" "),
            })
        }
        "rm" => match rest.as_slice() {
            [axis, index] => {
                let axis =
                    Axis::parse(axis).ok_or_else(|| format!("unknown dataset '{}'", axis))?;
                let index = index
                    .parse::<usize>()
                    .map_err(|_| format!("invalid index '{}'", index))?;
                Ok(ShellCommand::Remove { axis, index })
            }
            _ => Err("usage: rm <x|y> <index>".to_string()),
        },
        "type" => match rest.as_slice() {
            [kind] => Ok(ShellCommand::SetType(kind.parse()?)),
            _ => Err("usage: type <pearson|spearman|both>".to_string()),
        },
        "calc" | "calculate" => Ok(ShellCommand::Calculate),
        "clear" | "reset" => Ok(ShellCommand::Clear),
        "show" => Ok(ShellCommand::Show),
        "guide" => Ok(ShellCommand::Guide),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

/// Reads commands from `input` until EOF or `quit`.
pub async fn run<R: BufRead, W: Write>(
    session: &mut Session,
    client: &CorrelationClient,
    input: R,
    out: &mut W,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "Correlation Calculator ({})", client.base_url())?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        debug!(command = ?command, "Shell command");

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Add { axis, input } => {
                let dataset = session.dataset_mut(axis);
                if dataset.append_input(&input) {
                    writeln!(out, "{} count: {}", dataset.label(), dataset.len())?;
                } else {
                    writeln!(out, "Not a number: '{}'", input)?;
                }
            }
            ShellCommand::Remove { axis, index } => {
                let dataset = session.dataset_mut(axis);
                match dataset.remove_at(index) {
                    Some(value) => writeln!(
                        out,
                        "Removed {} from {} (count: {})",
                        value,
                        dataset.label(),
                        dataset.len()
                    )?,
                    None => writeln!(out, "No value at index {}", index)?,
                }
            }
            ShellCommand::SetType(kind) => {
                session.set_type(kind);
                writeln!(out, "Correlation Type: {}", kind)?;
            }
            ShellCommand::Calculate => {
                if !session.can_calculate() {
                    writeln!(out, "Error: {}", ValidationError::EmptyDataset)?;
                    continue;
                }
                writeln!(out, "Calculating...")?;
                match session.calculate(client).await {
                    Ok(outcome) => {
                        let view = ResultView::from_outcome(outcome);
                        write!(out, "{}", render::render_view(&view, color))?;
                    }
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            ShellCommand::Clear => {
                session.clear();
                writeln!(out, "Cleared.")?;
            }
            ShellCommand::Show => write!(out, "{}", render::render_session(session, color))?,
            ShellCommand::Guide => write!(out, "{}", render::render_guide())?,
            ShellCommand::Help => write!(out, "{}", HELP)?,
            ShellCommand::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}
