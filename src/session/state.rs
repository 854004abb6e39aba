//! Session-scoped state: login status and the accumulated trade blocks.

use serde::Serialize;

/// Who is logged in, and into which league.
///
/// Only the login event mutates this, and it sets all three fields in one
/// step so no observer ever sees `has_entered` without a team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    has_entered: bool,
    selected_team: Option<String>,
    selected_league: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(&self) -> bool {
        self.has_entered
    }

    pub fn selected_team(&self) -> Option<&str> {
        self.selected_team.as_deref()
    }

    pub fn selected_league(&self) -> Option<&str> {
        self.selected_league.as_deref()
    }

    pub(crate) fn enter(&mut self, team: impl Into<String>, league: impl Into<String>) {
        self.selected_team = Some(team.into());
        self.selected_league = Some(league.into());
        self.has_entered = true;
    }
}

/// One saved trade-block record.
///
/// A save always produces a `Players` entry and, for category-scored
/// leagues, a `CategoriesNeeded` entry right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TradeBlockEntry {
    Players {
        team: String,
        league: String,
        trade_block_players: Vec<String>,
    },
    CategoriesNeeded {
        team: String,
        league: String,
        categories_needed: Vec<String>,
    },
}

impl TradeBlockEntry {
    pub fn team(&self) -> &str {
        match self {
            TradeBlockEntry::Players { team, .. } | TradeBlockEntry::CategoriesNeeded { team, .. } => {
                team
            }
        }
    }

    pub fn league(&self) -> &str {
        match self {
            TradeBlockEntry::Players { league, .. }
            | TradeBlockEntry::CategoriesNeeded { league, .. } => league,
        }
    }
}
