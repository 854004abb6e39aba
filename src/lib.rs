//! Fantasy Trade Analyzer Library
//!
//! Collects fantasy hockey league data (leagues, standings, rosters and stat
//! categories) and drives a trade-analysis session on top of it: log in as a
//! team, build a trade block and pick players to trade with another team.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fantasy_trade_analyzer::data_fetcher::{LeagueTables, load_snapshot};
//! use fantasy_trade_analyzer::error::AppError;
//! use fantasy_trade_analyzer::session::{ControlId, InputPanel, SessionController, UiEvent};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let snapshot = load_snapshot("leagues.json").await?;
//!     let tables = Arc::new(LeagueTables::from_snapshot(&snapshot.leagues));
//!
//!     let mut panel = InputPanel::new();
//!     let mut controller = SessionController::new(tables);
//!     controller.start(&mut panel);
//!
//!     panel
//!         .select(ControlId::UserLeagueName, vec!["My League".to_string()])
//!         .map_err(|e| AppError::config_error(e.to_string()))?;
//!     controller.handle(UiEvent::LeagueSelectionChanged, &mut panel);
//!     println!("Teams: {:?}", panel.choices(ControlId::UserTeamName));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod session;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    LeagueDataProvider, LeagueSnapshot, LeagueTables, SnapshotFile, collect_leagues,
    fetch_league_snapshot,
};
pub use error::AppError;
pub use session::{ControlId, InputPanel, InputRegistry, SessionController, UiEvent};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
