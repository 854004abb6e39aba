pub mod league;
pub mod responses;
pub mod snapshot;

pub use league::{LeagueId, LeagueInfo, ScoringType};
pub use responses::{
    LeagueIdsResponse, LeagueSettings, Manager, ManagerEntry, RosterPlayer, StandingsEntry,
    StatCategory, TeamDetails, TeamsResponse,
};
pub use snapshot::{LeagueSnapshot, SnapshotFile, TeamSnapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_snapshot_json_shape() {
        let league = LeagueSnapshot {
            id: LeagueId::new("453.l.1"),
            name: "Category League".to_string(),
            scoring_type: ScoringType::Head,
            categories: vec!["Goals".to_string(), "Assists".to_string()],
            standings: vec!["Team A".to_string()],
            teams: vec![TeamSnapshot::new("Team A", vec!["Player1".to_string()])],
        };

        let value = serde_json::to_value(&league).unwrap();
        assert_eq!(value["id"], "453.l.1");
        assert_eq!(value["scoring_type"], "head");
        assert_eq!(value["teams"][0]["roster"][0], "Player1");
        // Unset optional metadata is omitted
        assert!(value["teams"][0].get("manager_email").is_none());
    }

    #[test]
    fn test_league_snapshot_tolerates_missing_lists() {
        let json = r#"{"id": "453.l.2", "name": "Points League", "scoring_type": "point"}"#;
        let league: LeagueSnapshot = serde_json::from_str(json).unwrap();
        assert!(league.categories.is_empty());
        assert!(league.standings.is_empty());
        assert!(league.teams.is_empty());
        assert!(!league.scoring_type.is_head());
    }
}
