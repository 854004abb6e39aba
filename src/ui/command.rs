//! Parsing shell input lines into commands.

use crate::session::{ControlId, UiEvent};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a control's value, then optionally dispatch the event the
    /// control raises when it changes.
    Select {
        control: ControlId,
        values: Vec<String>,
        then: Option<UiEvent>,
    },
    Dispatch(UiEvent),
    ShowBlocks,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),
    #[error("'{0}' does not take arguments")]
    UnexpectedArgument(String),
}

pub const HELP_LINES: &[(&str, &str)] = &[
    ("league <name>", "choose your league"),
    ("team <name>", "choose your team"),
    ("continue", "log in with the chosen team"),
    ("add <player>, ...", "players for your trade block"),
    ("categories <name>, ...", "categories you need"),
    ("save", "save your trade block"),
    ("view <team>", "look at a team's trade block"),
    ("offer <player>, ...", "players you want to trade away"),
    ("partner <team>", "team to trade with"),
    ("want <player>, ...", "players you want in return"),
    ("trade", "submit the trade"),
    ("ask <question>", "question for the assistant"),
    ("generate", "generate a response"),
    ("blocks", "print saved trade blocks"),
    ("show", "redraw the screen"),
    ("quit", "exit"),
];

fn split_list(rest: &str) -> Vec<String> {
    rest.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn single(rest: &str) -> Vec<String> {
    if rest.is_empty() {
        Vec::new()
    } else {
        vec![rest.to_string()]
    }
}

fn select(control: ControlId, values: Vec<String>, then: Option<UiEvent>) -> Command {
    Command::Select {
        control,
        values,
        then,
    }
}

/// Parses one input line. Blank lines parse to `None`.
///
/// Commands that set a control accept an empty argument to clear it. List
/// commands take comma separated values, since names may contain spaces.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let word = word.to_lowercase();

    let no_args = |command: Command| {
        if rest.is_empty() {
            Ok(command)
        } else {
            Err(ParseError::UnexpectedArgument(word.clone()))
        }
    };

    let command = match word.as_str() {
        "league" => select(
            ControlId::UserLeagueName,
            single(rest),
            Some(UiEvent::LeagueSelectionChanged),
        ),
        "team" => select(ControlId::UserTeamName, single(rest), None),
        "continue" => no_args(Command::Dispatch(UiEvent::SubmitTeam))?,
        "add" => select(ControlId::PlayerAdder, split_list(rest), None),
        "categories" => select(ControlId::CategorySelector, split_list(rest), None),
        "save" => no_args(Command::Dispatch(UiEvent::SaveTradeBlock))?,
        "view" => select(
            ControlId::ViewBlock,
            single(rest),
            Some(UiEvent::ViewBlockChanged),
        ),
        "offer" => select(ControlId::AddYourPlayers, split_list(rest), None),
        "partner" => select(
            ControlId::TradePartner,
            single(rest),
            Some(UiEvent::TradePartnerChanged),
        ),
        "want" => select(ControlId::AddOtherPlayers, split_list(rest), None),
        "trade" => no_args(Command::Dispatch(UiEvent::SubmitTrade))?,
        "ask" => select(ControlId::ChatInput, single(rest), None),
        "generate" => no_args(Command::Dispatch(UiEvent::GenerateResponse))?,
        "blocks" => no_args(Command::ShowBlocks)?,
        "show" => no_args(Command::Show)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_no_command() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn test_single_value_keeps_inner_spaces() {
        assert_eq!(
            parse_command("league  Category League ").unwrap(),
            Some(Command::Select {
                control: ControlId::UserLeagueName,
                values: vec!["Category League".to_string()],
                then: Some(UiEvent::LeagueSelectionChanged),
            })
        );
    }

    #[test]
    fn test_list_values_split_on_commas() {
        assert_eq!(
            parse_command("add Player1, Player Two ,,").unwrap(),
            Some(Command::Select {
                control: ControlId::PlayerAdder,
                values: vec!["Player1".to_string(), "Player Two".to_string()],
                then: None,
            })
        );
    }

    #[test]
    fn test_empty_argument_clears() {
        assert_eq!(
            parse_command("team").unwrap(),
            Some(Command::Select {
                control: ControlId::UserTeamName,
                values: vec![],
                then: None,
            })
        );
    }

    #[test]
    fn test_event_commands() {
        assert_eq!(
            parse_command("Continue").unwrap(),
            Some(Command::Dispatch(UiEvent::SubmitTeam))
        );
        assert_eq!(
            parse_command("save").unwrap(),
            Some(Command::Dispatch(UiEvent::SaveTradeBlock))
        );
        assert_eq!(parse_command("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_command("dance"),
            Err(ParseError::UnknownCommand("dance".to_string()))
        );
        assert_eq!(
            parse_command("save now"),
            Err(ParseError::UnexpectedArgument("save".to_string()))
        );
    }
}
