pub mod api;
pub mod models;
pub mod provider;
pub mod snapshot;
pub mod tables;

pub use api::{collect_leagues, fetch_league_snapshot};
pub use models::{LeagueId, LeagueInfo, LeagueSnapshot, ScoringType, SnapshotFile, TeamSnapshot};
pub use provider::LeagueDataProvider;
pub use snapshot::{load_snapshot, save_snapshot};
pub use tables::LeagueTables;
