use super::league::{LeagueId, ScoringType};
use serde::{Deserialize, Serialize};

/// Everything collected for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub name: String,
    #[serde(default)]
    pub team_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub roster: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiver_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_moves: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_trades: Option<u32>,
}

impl TeamSnapshot {
    pub fn new(name: impl Into<String>, roster: Vec<String>) -> Self {
        Self {
            name: name.into(),
            team_key: String::new(),
            team_id: None,
            roster,
            manager_nickname: None,
            manager_email: None,
            waiver_priority: None,
            number_of_moves: None,
            number_of_trades: None,
        }
    }
}

/// Everything collected for one league.
///
/// `standings` holds team names in the order the API ranked them; `teams`
/// holds the per-team details in whatever order the API listed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub id: LeagueId,
    pub name: String,
    pub scoring_type: ScoringType,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub standings: Vec<String>,
    #[serde(default)]
    pub teams: Vec<TeamSnapshot>,
}

/// On-disk snapshot of a full collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub game_code: String,
    pub season: i32,
    pub collected_at: String,
    pub leagues: Vec<LeagueSnapshot>,
}
