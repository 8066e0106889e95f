//! Bot command parsing.

use std::fmt;
use std::str::FromStr;

/// A bot command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Export,
    Help,
    Exit,
}

/// Every command, in the order `help` lists them.
pub const ALL_COMMANDS: [Command; 13] = [
    Command::Hello,
    Command::Add,
    Command::Change,
    Command::Phone,
    Command::All,
    Command::AddBirthday,
    Command::ShowBirthday,
    Command::Birthdays,
    Command::Delete,
    Command::RemovePhone,
    Command::Export,
    Command::Help,
    Command::Exit,
];

/// The keyword did not match any command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "remove-phone" => Ok(Command::RemovePhone),
            "export" => Ok(Command::Export),
            "help" => Ok(Command::Help),
            "exit" | "close" => Ok(Command::Exit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

impl Command {
    /// Number of arguments the command takes, `None` if it ignores them.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Command::Hello | Command::Exit => None,
            Command::All | Command::Birthdays | Command::Export | Command::Help => Some(0),
            Command::Phone | Command::ShowBirthday | Command::Delete => Some(1),
            Command::Add | Command::AddBirthday | Command::RemovePhone => Some(2),
            Command::Change => Some(3),
        }
    }

    /// One-line usage text.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old_phone> <new_phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <birthday (DD.MM.YYYY)>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete <name>",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Export => "export",
            Command::Help => "help",
            Command::Exit => "exit | close",
        }
    }
}

/// Split a line into a command keyword and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?;
    Some((keyword, parts.collect()))
}
