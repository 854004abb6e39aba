//! Response bodies returned by the fantasy API gateway.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LeagueIdsResponse {
    #[serde(rename = "league_ids")]
    pub league_ids: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scoring_type: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatCategory {
    pub display_name: String,
}

/// One row of league standings, in ranking order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingsEntry {
    pub team_key: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Manager {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ManagerEntry {
    pub manager: Manager,
}

/// Team details keyed by team key in the `/teams` response.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TeamDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub managers: Vec<ManagerEntry>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub waiver_priority: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub number_of_moves: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub number_of_trades: Option<u32>,
}

/// The `/teams` object as `(team_key, details)` pairs in API order.
#[derive(Debug, Clone, Default)]
pub struct TeamsResponse(pub Vec<(String, TeamDetails)>);

impl TeamsResponse {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for TeamsResponse {
    type Item = (String, TeamDetails);
    type IntoIter = std::vec::IntoIter<(String, TeamDetails)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for TeamsResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // serde_json's preserve_order keeps the object's key order
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        object
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value(value)
                    .map(|details| (key, details))
                    .map_err(D::Error::custom)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TeamsResponse)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RosterPlayer {
    pub name: String,
}

/// Numeric fields arrive either as numbers or as numeric strings ("" when unset).
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
