use crate::constants::CATEGORY_SCORING_TYPE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-specific league identifier (e.g. `"453.l.12345"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a league is scored. Head-to-head category leagues are the only ones
/// that expose stat categories; every other value the API reports is kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScoringType {
    Head,
    Other(String),
}

impl ScoringType {
    pub fn is_head(&self) -> bool {
        matches!(self, ScoringType::Head)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScoringType::Head => CATEGORY_SCORING_TYPE,
            ScoringType::Other(value) => value,
        }
    }
}

impl From<String> for ScoringType {
    fn from(value: String) -> Self {
        if value == CATEGORY_SCORING_TYPE {
            ScoringType::Head
        } else {
            ScoringType::Other(value)
        }
    }
}

impl From<&str> for ScoringType {
    fn from(value: &str) -> Self {
        ScoringType::from(value.to_string())
    }
}

impl From<ScoringType> for String {
    fn from(value: ScoringType) -> Self {
        match value {
            ScoringType::Head => CATEGORY_SCORING_TYPE.to_string(),
            ScoringType::Other(value) => value,
        }
    }
}

impl fmt::Display for ScoringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// League table row: what a league display name resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueInfo {
    pub id: LeagueId,
    pub name: String,
    pub scoring_type: ScoringType,
}
