//! In-memory lookup tables built from collected league snapshots.

use super::models::{LeagueId, LeagueInfo, LeagueSnapshot};
use super::provider::LeagueDataProvider;
use std::collections::HashMap;
use tracing::{debug, info};

/// Immutable league/team/category tables.
///
/// Built once before a session starts and shared read-only. Duplicate
/// league names, team names and category leagues keep their first
/// occurrence.
#[derive(Debug, Default, Clone)]
pub struct LeagueTables {
    leagues: Vec<LeagueInfo>,
    league_index: HashMap<String, usize>,
    standings: HashMap<LeagueId, Vec<String>>,
    team_order: Vec<String>,
    rosters: HashMap<String, Vec<String>>,
    categories: HashMap<String, Vec<String>>,
}

impl LeagueTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(leagues: &[LeagueSnapshot]) -> Self {
        let mut tables = Self::new();
        for league in leagues {
            tables.insert_league(league);
        }
        info!(
            "Built league tables: {} leagues, {} teams, {} category leagues",
            tables.leagues.len(),
            tables.team_order.len(),
            tables.categories.len()
        );
        tables
    }

    fn insert_league(&mut self, league: &LeagueSnapshot) {
        if league.teams.is_empty() {
            debug!("League '{}' has no teams, not offering it at login", league.name);
        } else if self.league_index.contains_key(&league.name) {
            debug!("Duplicate league name '{}', keeping first", league.name);
        } else {
            self.league_index
                .insert(league.name.clone(), self.leagues.len());
            self.leagues.push(LeagueInfo {
                id: league.id.clone(),
                name: league.name.clone(),
                scoring_type: league.scoring_type.clone(),
            });
        }

        self.standings
            .entry(league.id.clone())
            .or_insert_with(|| league.standings.clone());

        if league.scoring_type.is_head() && !self.categories.contains_key(&league.name) {
            self.categories
                .insert(league.name.clone(), league.categories.clone());
        }

        for team in &league.teams {
            if self.rosters.contains_key(&team.name) {
                debug!("Duplicate team name '{}', keeping first roster", team.name);
                continue;
            }
            self.team_order.push(team.name.clone());
            self.rosters.insert(team.name.clone(), team.roster.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    pub fn league_count(&self) -> usize {
        self.leagues.len()
    }
}

impl LeagueDataProvider for LeagueTables {
    fn league_names(&self) -> Vec<&str> {
        self.leagues.iter().map(|l| l.name.as_str()).collect()
    }

    fn team_names(&self) -> Vec<&str> {
        self.team_order.iter().map(String::as_str).collect()
    }

    fn lookup_league(&self, league_name: &str) -> Option<&LeagueInfo> {
        self.league_index
            .get(league_name)
            .and_then(|&idx| self.leagues.get(idx))
    }

    fn lookup_standings(&self, league_id: &LeagueId) -> &[String] {
        self.standings
            .get(league_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn lookup_roster(&self, team_name: &str) -> &[String] {
        self.rosters
            .get(team_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn lookup_categories(&self, league_name: &str) -> &[String] {
        self.categories
            .get(league_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{ScoringType, TeamSnapshot};

    fn league(id: &str, name: &str, scoring: &str, teams: &[(&str, &[&str])]) -> LeagueSnapshot {
        LeagueSnapshot {
            id: LeagueId::new(id),
            name: name.to_string(),
            scoring_type: ScoringType::from(scoring),
            categories: if scoring == "head" {
                vec!["Goals".to_string(), "Assists".to_string()]
            } else {
                vec![]
            },
            standings: teams.iter().map(|(n, _)| n.to_string()).collect(),
            teams: teams
                .iter()
                .map(|(n, roster)| {
                    TeamSnapshot::new(*n, roster.iter().map(|p| p.to_string()).collect())
                })
                .collect(),
        }
    }

    #[test]
    fn test_lookups_resolve_exact_names() {
        let tables = LeagueTables::from_snapshot(&[league(
            "1",
            "Category League",
            "head",
            &[("Team A", &["Player1", "Player2"]), ("Team B", &["Player3"])],
        )]);

        let info = tables.lookup_league("Category League").unwrap();
        assert_eq!(info.id, LeagueId::new("1"));
        assert!(info.scoring_type.is_head());
        assert_eq!(tables.lookup_standings(&info.id), ["Team A", "Team B"]);
        assert_eq!(tables.lookup_roster("Team A"), ["Player1", "Player2"]);
        assert_eq!(tables.lookup_categories("Category League"), ["Goals", "Assists"]);
    }

    #[test]
    fn test_unknown_names_resolve_to_empty() {
        let tables = LeagueTables::from_snapshot(&[league("1", "L", "point", &[("A", &["P"])])]);

        assert!(tables.lookup_league("Unknown").is_none());
        assert!(tables.lookup_league("l").is_none());
        assert!(tables.lookup_roster("a").is_empty());
        assert!(tables.lookup_roster(" A").is_empty());
        assert!(tables.lookup_standings(&LeagueId::new("999")).is_empty());
        assert!(tables.lookup_categories("L").is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let tables = LeagueTables::from_snapshot(&[
            league("1", "Shared", "head", &[("Team A", &["First"])]),
            league("2", "Shared", "point", &[("Team A", &["Second"]), ("Team C", &[])]),
        ]);

        assert_eq!(tables.league_count(), 1);
        assert_eq!(tables.lookup_league("Shared").unwrap().id, LeagueId::new("1"));
        assert_eq!(tables.lookup_roster("Team A"), ["First"]);
        assert_eq!(tables.team_names(), vec!["Team A", "Team C"]);
        // Standings are keyed by id, so the second league's order survives
        assert_eq!(
            tables.lookup_standings(&LeagueId::new("2")),
            ["Team A", "Team C"]
        );
    }

    #[test]
    fn test_categories_only_for_head_leagues() {
        let mut points = league("2", "Points League", "point", &[]);
        points.categories = vec!["Goals".to_string()];
        let tables = LeagueTables::from_snapshot(&[points]);

        assert!(tables.lookup_categories("Points League").is_empty());
    }

    #[test]
    fn test_league_names_keep_table_order() {
        let tables = LeagueTables::from_snapshot(&[
            league("2", "Zeta", "point", &[("Z1", &[])]),
            league("1", "Alpha", "head", &[("A1", &[])]),
        ]);
        assert_eq!(tables.league_names(), vec!["Zeta", "Alpha"]);
        assert!(!tables.is_empty());
        assert!(LeagueTables::new().is_empty());
    }

    #[test]
    fn test_leagues_without_teams_are_not_listed() {
        let tables = LeagueTables::from_snapshot(&[
            league("1", "Empty", "head", &[]),
            league("2", "Empty", "point", &[("Team A", &["P"])]),
            league("3", "Ghost", "point", &[]),
        ]);

        assert_eq!(tables.league_names(), vec!["Empty"]);
        assert_eq!(tables.lookup_league("Empty").unwrap().id, LeagueId::new("2"));
        assert!(tables.lookup_league("Ghost").is_none());
    }
}
