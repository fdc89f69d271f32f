use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::journal::{Direction, JournalError, Symbol, TradeInput};
use crate::session::UserAction;

pub const HELP: &str = "\
Commands:
  add <SYMBOL> <buy|sell> <entry> <exit> <pnl> [notes...]   record a trade
  select <row> | unselect <row>                            stage a row for deletion
  note <row> <text>                                        edit a row's notes
  delete                                                   remove all staged rows
  show | json                                              print the dashboard
  help | quit
Symbols: NAS100 XAUUSD GBPUSD EURUSD BTCUSD. Rows are numbered from 1.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a valid {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("rows are numbered from 1, got '{0}'")]
    InvalidRow(String),

    #[error(transparent)]
    Journal(#[from] JournalError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(UserAction),
    Show,
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name.to_lowercase().as_str() {
            "add" => parse_add(rest).map(|input| Command::Action(UserAction::Submit(input))),
            "select" | "unselect" => {
                let row = parse_row(rest)?;
                Ok(Command::Action(UserAction::ToggleSelected {
                    row,
                    selected: name.eq_ignore_ascii_case("select"),
                }))
            }
            "note" => {
                let (row, notes) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if row.is_empty() {
                    return Err(CommandError::Usage("note <row> <text>"));
                }
                Ok(Command::Action(UserAction::EditNotes {
                    row: parse_row(row)?,
                    notes: notes.trim().to_string(),
                }))
            }
            "delete" => Ok(Command::Action(UserAction::ClickDelete)),
            "show" | "" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_add(args: &str) -> Result<TradeInput, CommandError> {
    const USAGE: &str = "add <SYMBOL> <buy|sell> <entry> <exit> <pnl> [notes...]";

    let mut words = Vec::with_capacity(5);
    let mut rest = args;
    for _ in 0..5 {
        let (word, tail) = split_word(rest).ok_or(CommandError::Usage(USAGE))?;
        words.push(word);
        rest = tail;
    }

    let symbol: Symbol = words[0].parse()?;
    let direction: Direction = words[1].parse()?;
    let entry_price = parse_decimal("entry price", words[2])?;
    let exit_price = parse_decimal("exit price", words[3])?;
    let pnl = parse_decimal("pnl", words[4])?;
    let notes = rest.trim().to_string();

    let input = TradeInput {
        symbol,
        direction,
        entry_price,
        exit_price,
        pnl,
        notes,
    };
    // Negative prices stop here, before the session sees them
    input.validate()?;
    Ok(input)
}

fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    Some(s.split_once(char::is_whitespace).unwrap_or((s, "")))
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, CommandError> {
    Decimal::from_str(value).map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_row(value: &str) -> Result<usize, CommandError> {
    match value.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(CommandError::InvalidRow(value.to_string())),
    }
}
