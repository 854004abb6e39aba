use crate::data_fetcher::models::{LeagueId, LeagueSnapshot, ScoringType, TeamSnapshot};
use crate::data_fetcher::LeagueTables;
use std::collections::HashSet;

/// Test utilities for creating league data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Creates a league with one team per `(name, roster)` pair. Standings
    /// follow the order the teams are given in.
    pub fn create_league(
        id: &str,
        name: &str,
        scoring_type: &str,
        teams: &[(&str, &[&str])],
    ) -> LeagueSnapshot {
        LeagueSnapshot {
            id: LeagueId::new(id),
            name: name.to_string(),
            scoring_type: ScoringType::from(scoring_type),
            categories: vec![],
            standings: teams.iter().map(|(team, _)| team.to_string()).collect(),
            teams: teams
                .iter()
                .map(|(team, roster)| TeamSnapshot::new(*team, Self::names(roster)))
                .collect(),
        }
    }

    /// Creates a head-to-head category league
    pub fn create_category_league(
        id: &str,
        name: &str,
        categories: &[&str],
        teams: &[(&str, &[&str])],
    ) -> LeagueSnapshot {
        let mut league = Self::create_league(id, name, "head", teams);
        league.categories = Self::names(categories);
        league
    }

    /// Three leagues: a category league, a points league and a small
    /// points league named "L".
    pub fn create_sample_leagues() -> Vec<LeagueSnapshot> {
        vec![
            Self::create_category_league(
                "1",
                "Category League",
                &["Goals", "Assists"],
                &[
                    ("Team A", &["Player1", "Player2"]),
                    ("Team B", &["Player3", "Player4"]),
                    ("Team C", &["Player5"]),
                ],
            ),
            Self::create_league(
                "2",
                "Points League",
                "point",
                &[("Team X", &["Player6"]), ("Team Y", &["Player7", "Player8"])],
            ),
            Self::create_league("3", "L", "point", &[("A", &[]), ("B", &[])]),
        ]
    }

    pub fn create_sample_tables() -> LeagueTables {
        LeagueTables::from_snapshot(&Self::create_sample_leagues())
    }
}

/// Consistency checks for collected league data
pub struct PropertyTesting;

impl PropertyTesting {
    /// Validates that a league snapshot is internally consistent
    pub fn validate_league(league: &LeagueSnapshot) -> Result<(), String> {
        if league.name.is_empty() {
            return Err(format!("League {} has an empty name", league.id));
        }

        if !league.scoring_type.is_head() && !league.categories.is_empty() {
            return Err(format!(
                "League '{}' is not category scored but lists categories",
                league.name
            ));
        }

        let team_names: HashSet<&str> = league.teams.iter().map(|t| t.name.as_str()).collect();
        if let Some(missing) = league
            .standings
            .iter()
            .find(|team| !team_names.contains(team.as_str()))
        {
            return Err(format!(
                "Standings of '{}' list '{missing}' which has no team details",
                league.name
            ));
        }

        Ok(())
    }

    /// Validates that no player appears on two rosters of the same league
    pub fn validate_rosters(league: &LeagueSnapshot) -> Result<(), String> {
        let mut seen = HashSet::new();
        for team in &league.teams {
            for player in &team.roster {
                if !seen.insert(player.as_str()) {
                    return Err(format!(
                        "Player '{player}' appears on more than one roster in '{}'",
                        league.name
                    ));
                }
            }
        }
        Ok(())
    }
}
