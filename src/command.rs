//! Textual browser commands
//!
//! One command per line, as typed into the interactive browser:
//!
//! ```text
//! query <text>        search product names (empty text clears)
//! clear               clear the search field
//! user <id>|all       select an owner tab
//! category <id>|all   toggle a category / select all categories
//! reset               reset all filters (sort is kept)
//! sort <column>       click a column's sort control
//! show | help | quit
//! ```

use std::str::FromStr;
use thiserror::Error;

use crate::selection::SelectionAction;
use crate::sort::SortColumn;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(SelectionAction),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },

    #[error("Invalid id '{0}'")]
    InvalidId(String),

    #[error("{0}")]
    InvalidColumn(String),
}

pub const HELP: &str = "\
query <text>        search product names (empty text clears)
clear               clear the search field
user <id>|all       select an owner tab
category <id>|all   toggle a category / select all categories
reset               reset all filters (sort is kept)
sort <column>       sort by id, product, category or user (click again to cycle)
show                print the current table
help                show this help
quit                exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let action = match word.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "show" | "ls" => return Ok(Command::Show),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            // query text is kept verbatim apart from the line ending
            "query" | "search" | "/" => {
                SelectionAction::SetQuery(rest.trim_end_matches(['\r', '\n']).to_string())
            }
            "clear" => SelectionAction::ClearQuery,
            "reset" => SelectionAction::ResetFilters,
            "user" | "owner" => match argument(word, rest, "a user id or 'all'")? {
                "all" => SelectionAction::SelectAllOwners,
                id => SelectionAction::SelectOwner(parse_id(id)?),
            },
            "category" | "cat" => match argument(word, rest, "a category id or 'all'")? {
                "all" => SelectionAction::SelectAllCategories,
                id => SelectionAction::ToggleCategory(parse_id(id)?),
            },
            "sort" => {
                let column = argument(word, rest, "a column name")?
                    .parse::<SortColumn>()
                    .map_err(CommandError::InvalidColumn)?;
                SelectionAction::ClickSort(column)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Command::Action(action))
    }
}

fn argument<'a>(
    command: &str,
    rest: &'a str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    let arg = rest.trim();
    if arg.is_empty() {
        Err(CommandError::MissingArgument {
            command: command.to_string(),
            expected,
        })
    } else {
        Ok(arg)
    }
}

fn parse_id(s: &str) -> Result<u32, CommandError> {
    s.parse().map_err(|_| CommandError::InvalidId(s.to_string()))
}
