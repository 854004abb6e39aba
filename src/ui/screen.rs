//! Drawing the login area and the main screen panels.

use super::colors::*;
use super::command::HELP_LINES;
use crate::constants::APP_TITLE;
use crate::data_fetcher::LeagueDataProvider;
use crate::error::AppError;
use crate::session::derivations::category_selector_visible;
use crate::session::{
    ControlId, EventOutcome, InputPanel, InputRegistry, SessionController, TradeBlockEntry,
};
use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

/// Options beyond this count are summarized instead of listed.
const MAX_LISTED_OPTIONS: usize = 12;

fn panel_header<W: Write>(out: &mut W, title: &str) -> Result<(), AppError> {
    queue!(
        out,
        SetForegroundColor(panel_fg()),
        SetAttribute(Attribute::Bold),
        Print(format!("== {title} ==\n")),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;
    Ok(())
}

fn control_row<W: Write>(
    out: &mut W,
    panel: &InputPanel,
    control: ControlId,
) -> Result<(), AppError> {
    let value = panel.value(control).to_list();
    let shown = if value.is_empty() {
        "-".to_string()
    } else {
        value.join(", ")
    };

    queue!(
        out,
        SetForegroundColor(label_fg()),
        Print(format!("  {}: ", control.label())),
        SetForegroundColor(value_fg()),
        Print(format!("{shown}\n")),
    )?;

    if !control.is_free_text() {
        let choices = panel.choices(control);
        let listed = if choices.is_empty() {
            "(none)".to_string()
        } else if choices.len() > MAX_LISTED_OPTIONS {
            format!(
                "{}, ... ({} more)",
                choices[..MAX_LISTED_OPTIONS].join(", "),
                choices.len() - MAX_LISTED_OPTIONS
            )
        } else {
            choices.join(", ")
        };
        queue!(
            out,
            SetForegroundColor(option_fg()),
            Print(format!("    options: {listed}\n")),
        )?;
    }

    queue!(out, ResetColor)?;
    Ok(())
}

/// Renders the current screen: the login area until the user has entered,
/// the main screen panels afterwards.
pub fn render_screen<P, W>(
    out: &mut W,
    controller: &SessionController<P>,
    panel: &InputPanel,
) -> Result<(), AppError>
where
    P: LeagueDataProvider,
    W: Write,
{
    queue!(
        out,
        SetForegroundColor(title_fg()),
        SetAttribute(Attribute::Bold),
        Print(format!("{APP_TITLE}\n")),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;

    let session = controller.session();
    if !session.has_entered() {
        panel_header(out, "Login area")?;
        control_row(out, panel, ControlId::UserLeagueName)?;
        control_row(out, panel, ControlId::UserTeamName)?;
        queue!(out, Print("  [continue]\n"))?;
        out.flush()?;
        return Ok(());
    }

    queue!(
        out,
        SetForegroundColor(label_fg()),
        Print(format!(
            "Logged in as {} ({})\n",
            session.selected_team().unwrap_or_default(),
            session.selected_league().unwrap_or_default()
        )),
        ResetColor
    )?;

    panel_header(out, "Trade Block Adder")?;
    let league_input = panel.value(ControlId::UserLeagueName);
    if category_selector_visible(controller.provider(), league_input.as_single()) {
        control_row(out, panel, ControlId::CategorySelector)?;
    }
    control_row(out, panel, ControlId::PlayerAdder)?;
    queue!(out, Print("  [save]\n"))?;

    panel_header(out, "Trade Block Viewer")?;
    control_row(out, panel, ControlId::ViewBlock)?;

    panel_header(out, "Trade Simulator")?;
    control_row(out, panel, ControlId::AddYourPlayers)?;
    control_row(out, panel, ControlId::TradePartner)?;
    control_row(out, panel, ControlId::AddOtherPlayers)?;
    queue!(out, Print("  [trade]\n"))?;

    panel_header(out, "AI Assistance")?;
    control_row(out, panel, ControlId::ChatInput)?;
    queue!(out, Print("  [generate]\n"))?;

    out.flush()?;
    Ok(())
}

pub fn render_notice<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    queue!(
        out,
        SetForegroundColor(notice_fg()),
        Print(format!("! {message}\n")),
        ResetColor
    )?;
    out.flush()?;
    Ok(())
}

pub fn render_help<W: Write>(out: &mut W) -> Result<(), AppError> {
    let width = HELP_LINES
        .iter()
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0);
    for (usage, description) in HELP_LINES {
        queue!(
            out,
            SetForegroundColor(value_fg()),
            Print(format!("  {usage:<width$}  ")),
            SetForegroundColor(label_fg()),
            Print(format!("{description}\n")),
        )?;
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Prints the saved trade blocks as pretty JSON.
pub fn render_trade_blocks<W: Write>(
    out: &mut W,
    blocks: &[TradeBlockEntry],
) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(blocks)?;
    queue!(out, Print(format!("{json}\n")))?;
    out.flush()?;
    Ok(())
}

/// User-facing message for an event outcome, if it warrants one.
pub fn describe_outcome(outcome: &EventOutcome) -> Option<String> {
    match outcome {
        EventOutcome::Ignored | EventOutcome::OptionsUpdated => None,
        EventOutcome::LoggedIn { team, league } => Some(format!("Welcome, {team} of {league}")),
        EventOutcome::LoginRejected => {
            Some("Choose a league and one of its teams before continuing".to_string())
        }
        EventOutcome::TradeBlockSaved { entries_added } => {
            Some(format!("Trade block saved ({entries_added} entries)"))
        }
        EventOutcome::NotImplemented => Some("Not available yet".to_string()),
    }
}
