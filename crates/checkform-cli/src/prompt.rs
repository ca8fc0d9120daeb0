//! Line-based input for the interactive session
//!
//! The terminal cannot deliver raw key events through a line prompt, so
//! each line is parsed into a [`Command`]. Number keys and arrow names map
//! onto the same [`Key`] values a keyboard would produce.

use checkform_core::Key;
use checkform_types::Answer;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::{CliError, CliResult};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Key press routed through the focus router
    Key(Key),
    /// Direct click on an option of a 1-based item
    Pick { item: usize, answer: Answer },
    /// Focus a 1-based item
    Focus(usize),
    Submit,
    Reload,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
  1, 2          choose Yes / No in the focused check
  up, down      move focus (k / j also work)
  <n> yes|no    answer check <n> directly, e.g. '2 no' or '2n'
  focus <n>     focus check <n>
  submit        send the answers
  reload        fetch the checks again
  quit          leave without submitting";

/// Parse one input line.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let line = input.trim().to_ascii_lowercase();
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or("");
    let arg = parts.next();

    if parts.next().is_some() {
        return Err(format!("unexpected input '{}'", input.trim()));
    }

    match (head, arg) {
        ("up" | "k" | "arrowup", None) => Ok(Command::Key(Key::ArrowUp)),
        ("down" | "j" | "arrowdown", None) => Ok(Command::Key(Key::ArrowDown)),
        ("submit" | "s", None) => Ok(Command::Submit),
        ("reload" | "r", None) => Ok(Command::Reload),
        ("help" | "h" | "?", None) => Ok(Command::Help),
        ("quit" | "q" | "exit", None) => Ok(Command::Quit),
        ("focus" | "f", Some(n)) => parse_item(n).map(Command::Focus),
        (digits, None) if digits.chars().all(|c| c.is_ascii_digit()) && !digits.is_empty() => {
            digits
                .parse::<u8>()
                .map(|d| Command::Key(Key::Digit(d)))
                .map_err(|_| format!("'{}' is not an option", digits))
        }
        (n, Some(answer)) => Ok(Command::Pick {
            item: parse_item(n)?,
            answer: answer.parse::<Answer>().map_err(|e| e.to_string())?,
        }),
        (compact, None) => parse_compact_pick(compact),
    }
}

/// `2y` / `3no` style picks.
fn parse_compact_pick(token: &str) -> Result<Command, String> {
    let split = token
        .find(|c: char| !c.is_ascii_digit())
        .filter(|&idx| idx > 0)
        .ok_or_else(|| format!("unknown command '{}', type 'help'", token))?;
    let (n, answer) = token.split_at(split);

    Ok(Command::Pick {
        item: parse_item(n)?,
        answer: answer
            .parse::<Answer>()
            .map_err(|_| format!("unknown command '{}', type 'help'", token))?,
    })
}

fn parse_item(n: &str) -> Result<usize, String> {
    match n.parse::<usize>() {
        Ok(item) if item > 0 => Ok(item),
        _ => Err(format!("'{}' is not a check number", n)),
    }
}

/// Source of user commands
pub trait Prompt {
    fn read_command(&mut self) -> CliResult<Command>;
}

/// Interactive prompt backed by `dialoguer`
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for DialoguerPrompt {
    fn read_command(&mut self) -> CliResult<Command> {
        loop {
            let line = Input::<String>::with_theme(&self.theme)
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| CliError::Prompt(e.to_string()))?;

            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(command) => return Ok(command),
                Err(message) => crate::output::print_warning(&message),
            }
        }
    }
}

/// Replays a fixed list of commands, then quits.
#[cfg(test)]
pub(crate) struct ScriptedPrompt {
    commands: std::collections::VecDeque<Command>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            commands: lines
                .iter()
                .map(|line| parse_command(line).unwrap())
                .collect(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn read_command(&mut self) -> CliResult<Command> {
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }
}
