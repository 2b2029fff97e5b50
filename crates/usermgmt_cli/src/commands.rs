//! Line command parsing for the terminal front end.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use usermgmt_core::{Gender, UserId};

pub const HELP: &str = "\
commands:
  list                     show all users
  show                     print the user list as JSON
  select <id>              edit the user with <id>
  new                      clear the selection and start a new user
  name <text>              set the name field
  surname <text>           set the surname field
  birthdate <YYYY-MM-DD>   set the birthdate field
  gender <male|female|none>
  save                     add or update from the form
  delete                   delete the selected user
  cancel                   clear the form
  form                     show the form
  help                     show this help
  quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Select(UserId),
    New,
    Name(String),
    Surname(String),
    Birthdate(NaiveDate),
    Gender(Option<Gender>),
    Save,
    Delete,
    Cancel,
    Form,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidId(String),
    InvalidDate(String),
    InvalidGender(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command; type `help`"),
            Self::Unknown(value) => write!(f, "unknown command `{value}`; type `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::InvalidId(value) => write!(f, "invalid user id `{value}`"),
            Self::InvalidDate(value) => write!(f, "invalid date `{value}`; expected YYYY-MM-DD"),
            Self::InvalidGender(value) => {
                write!(f, "invalid gender `{value}`; expected male|female|none")
            }
        }
    }
}

impl Error for CommandError {}

impl Command {
    /// Parses one input line; the argument is the trimmed rest of the line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Self::List),
            "show" => Ok(Self::Show),
            "select" => {
                let raw = required(rest, "select")?;
                raw.parse::<u64>()
                    .map(|id| Self::Select(UserId(id)))
                    .map_err(|_| CommandError::InvalidId(raw.to_string()))
            }
            "new" => Ok(Self::New),
            "name" => Ok(Self::Name(rest.to_string())),
            "surname" => Ok(Self::Surname(rest.to_string())),
            "birthdate" => {
                let raw = required(rest, "birthdate")?;
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map(Self::Birthdate)
                    .map_err(|_| CommandError::InvalidDate(raw.to_string()))
            }
            "gender" => {
                let raw = required(rest, "gender")?;
                if raw.eq_ignore_ascii_case("none") {
                    return Ok(Self::Gender(None));
                }
                raw.parse::<Gender>()
                    .map(|gender| Self::Gender(Some(gender)))
                    .map_err(|_| CommandError::InvalidGender(raw.to_string()))
            }
            "save" => Ok(Self::Save),
            "delete" => Ok(Self::Delete),
            "cancel" => Ok(Self::Cancel),
            "form" => Ok(Self::Form),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(value: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandError};
    use chrono::NaiveDate;
    use usermgmt_core::{Gender, UserId};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse("select 2"), Ok(Command::Select(UserId(2))));
        assert_eq!(
            Command::parse("  name  Mary Ann "),
            Ok(Command::Name("Mary Ann".to_string()))
        );
        assert_eq!(
            Command::parse("birthdate 2000-01-01"),
            Ok(Command::Birthdate(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()))
        );
        assert_eq!(
            Command::parse("gender Female"),
            Ok(Command::Gender(Some(Gender::Female)))
        );
        assert_eq!(Command::parse("gender none"), Ok(Command::Gender(None)));
        assert_eq!(Command::parse("SAVE"), Ok(Command::Save));
    }

    #[test]
    fn empty_text_argument_clears_field() {
        assert_eq!(Command::parse("surname"), Ok(Command::Surname(String::new())));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!(
            Command::parse("select"),
            Err(CommandError::MissingArgument("select"))
        );
        assert_eq!(
            Command::parse("select abc"),
            Err(CommandError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            Command::parse("birthdate 01/01/2000"),
            Err(CommandError::InvalidDate("01/01/2000".to_string()))
        );
        assert_eq!(
            Command::parse("gender robot"),
            Err(CommandError::InvalidGender("robot".to_string()))
        );
    }
}
