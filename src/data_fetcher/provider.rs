//! Read-only league data seen by a session.
//!
//! Every lookup is total: anything unknown resolves to `None` or an empty
//! slice, never an error. Matching is exact string equality.

use super::models::{LeagueId, LeagueInfo};

pub trait LeagueDataProvider {
    /// League display names in table order.
    fn league_names(&self) -> Vec<&str>;

    /// Team display names in table order.
    fn team_names(&self) -> Vec<&str>;

    fn lookup_league(&self, league_name: &str) -> Option<&LeagueInfo>;

    /// Team names of a league in standings order.
    fn lookup_standings(&self, league_id: &LeagueId) -> &[String];

    fn lookup_roster(&self, team_name: &str) -> &[String];

    /// Stat categories; only category-scored leagues have any.
    fn lookup_categories(&self, league_name: &str) -> &[String];
}
