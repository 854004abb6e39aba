//! Values derived from the session, the current control values and the
//! league tables.
//!
//! Nothing here is stored: every function is recomputed on demand so a
//! derived value can never go stale relative to its inputs.

use super::state::Session;
use crate::data_fetcher::{LeagueDataProvider, LeagueId};

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// League id for a league display name.
pub fn active_league_id<'a, P>(provider: &'a P, league_name: Option<&str>) -> Option<&'a LeagueId>
where
    P: LeagueDataProvider + ?Sized,
{
    non_empty(league_name)
        .and_then(|name| provider.lookup_league(name))
        .map(|info| &info.id)
}

/// Teams of a league in standings order; empty for unknown leagues.
pub fn active_teams<'a, P>(provider: &'a P, league_name: Option<&str>) -> &'a [String]
where
    P: LeagueDataProvider + ?Sized,
{
    match active_league_id(provider, league_name) {
        Some(id) => provider.lookup_standings(id),
        None => &[],
    }
}

/// Whether a league uses head-to-head category scoring.
pub fn is_category_league<P>(provider: &P, league_name: Option<&str>) -> bool
where
    P: LeagueDataProvider + ?Sized,
{
    non_empty(league_name)
        .and_then(|name| provider.lookup_league(name))
        .is_some_and(|info| info.scoring_type.is_head())
}

/// The category selector is only shown while a category league is chosen
/// in the login league selector.
pub fn category_selector_visible<P>(provider: &P, league_input: Option<&str>) -> bool
where
    P: LeagueDataProvider + ?Sized,
{
    is_category_league(provider, league_input)
}

pub fn your_team_roster<'a, P>(provider: &'a P, session: &Session) -> &'a [String]
where
    P: LeagueDataProvider + ?Sized,
{
    match non_empty(session.selected_team()) {
        Some(team) => provider.lookup_roster(team),
        None => &[],
    }
}

pub fn trade_partner_roster<'a, P>(provider: &'a P, partner: Option<&str>) -> &'a [String]
where
    P: LeagueDataProvider + ?Sized,
{
    match non_empty(partner) {
        Some(team) => provider.lookup_roster(team),
        None => &[],
    }
}

/// Categories of the logged-in league, falling back to the league chosen in
/// the login selector before login.
pub fn active_categories<'a, P>(
    provider: &'a P,
    session: &Session,
    league_input: Option<&str>,
) -> &'a [String]
where
    P: LeagueDataProvider + ?Sized,
{
    match non_empty(session.selected_league()).or(non_empty(league_input)) {
        Some(league) => provider.lookup_categories(league),
        None => &[],
    }
}

/// Teams the logged-in team can trade with: its league minus itself.
pub fn trade_partner_choices<P>(provider: &P, session: &Session) -> Vec<String>
where
    P: LeagueDataProvider + ?Sized,
{
    active_teams(provider, session.selected_league())
        .iter()
        .filter(|team| Some(team.as_str()) != session.selected_team())
        .cloned()
        .collect()
}
