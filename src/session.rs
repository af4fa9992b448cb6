//! Line-oriented driver for the calculator. Each input line is one form
//! event: a selection change, a comment edit, a panel toggle or the
//! compute action. Errors are shown and the session continues.

use crate::calculator::Calculator;
use crate::content::TITLE;
use crate::error::{Result, SeverityError};
use crate::report::text;
use crate::types::criteria::Criterion;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "commands:
  set <criterion> <value>     change a selection
  clear <criterion>           return a selection to -- Select -- (explicit EI)
  comment <criterion> <text>  set the justification (reactive variant)
  compute                     calculate severity
  examples <criterion>        toggle the Know More panel
  options <criterion>         list the allowed options
  show                        print the current result
  help                        print this help
  quit                        end the session
criteria: dpc, ei, confidentiality, integrity, availability, malicious";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Criterion, String),
    Clear(Criterion),
    Comment(Criterion, String),
    Compute,
    Examples(Criterion),
    Options(Criterion),
    Show,
    Help,
    Quit,
}

/// Parses one input line; `Ok(None)` for blank lines and `#` comments.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            let (criterion, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| SeverityError::UnknownCommand(line.to_string()))?;
            Command::Set(criterion.parse()?, value.trim().to_string())
        }
        "clear" | "unset" => Command::Clear(rest.parse()?),
        "comment" => {
            let (criterion, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::Comment(criterion.parse()?, text.trim().to_string())
        }
        "compute" | "calculate" => Command::Compute,
        "examples" | "know-more" => Command::Examples(rest.parse()?),
        "options" => Command::Options(rest.parse()?),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(SeverityError::UnknownCommand(line.to_string())),
    };
    Ok(Some(command))
}

/// Runs the session until `quit` or end of input. Only I/O failures end it early.
pub fn run<R: BufRead, W: Write>(calculator: &mut Calculator, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{TITLE} ({} variant), type 'help' for commands", calculator.variant())?;
    if let Some(result) = calculator.result() {
        write!(out, "{}", text::summary(result))?;
    }

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        debug!(?command, "session command");
        if command == Command::Quit {
            break;
        }
        if let Err(err) = apply(calculator, command, out) {
            if !err.is_input_error() {
                return Err(err);
            }
            writeln!(out, "error: {err}")?;
        }
    }
    Ok(())
}

fn apply<W: Write>(calculator: &mut Calculator, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Set(criterion, value) => {
            calculator.set(criterion, &value)?;
            writeln!(
                out,
                "{}: {}",
                criterion.title(),
                calculator.selected_description(criterion)
            )?;
            print_if_reactive(calculator, out)?;
        }
        Command::Clear(criterion) => {
            calculator.clear(criterion)?;
            writeln!(
                out,
                "{}: {}",
                criterion.title(),
                calculator.content().unset_label
            )?;
        }
        Command::Comment(criterion, text) => {
            calculator.set_comment(criterion, &text)?;
            writeln!(out, "{}: comment saved", criterion.title())?;
            print_if_reactive(calculator, out)?;
        }
        Command::Compute => {
            let result = calculator.compute()?;
            write!(out, "{}", text::summary(result))?;
        }
        Command::Examples(criterion) => {
            if calculator.toggle_examples(criterion)? {
                let examples = calculator.content().examples(criterion).unwrap_or_default();
                writeln!(out, "{examples}")?;
            } else {
                writeln!(out, "{}: Know More hidden", criterion.title())?;
            }
        }
        Command::Options(criterion) => {
            let content = calculator.content().criterion(criterion);
            for option in content.options {
                writeln!(out, "  {:<5} {}", option.value, option.label)?;
            }
        }
        Command::Show => match calculator.result() {
            Some(result) => write!(out, "{}", text::summary(result))?,
            None => writeln!(out, "no result yet")?,
        },
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn print_if_reactive<W: Write>(calculator: &Calculator, out: &mut W) -> Result<()> {
    if calculator.profile().recompute_on_change {
        if let Some(result) = calculator.result() {
            write!(out, "{}", text::summary(result))?;
        }
    }
    Ok(())
}
