//! Reading and writing collected league data as JSON.

use super::models::{LeagueSnapshot, SnapshotFile};
use crate::error::AppError;
use chrono::Utc;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

impl SnapshotFile {
    pub fn new(game_code: impl Into<String>, season: i32, leagues: Vec<LeagueSnapshot>) -> Self {
        Self {
            game_code: game_code.into(),
            season,
            collected_at: Utc::now().to_rfc3339(),
            leagues,
        }
    }
}

/// Loads a snapshot file. A snapshot without leagues is rejected since no
/// session could log in against it.
#[instrument]
pub async fn load_snapshot(path: &str) -> Result<SnapshotFile, AppError> {
    let content = fs::read_to_string(path).await?;
    let snapshot: SnapshotFile = serde_json::from_str(&content)?;

    if snapshot.leagues.is_empty() {
        return Err(AppError::snapshot_error(format!(
            "Snapshot '{path}' contains no leagues"
        )));
    }

    info!(
        "Loaded snapshot with {} leagues ({} {}, collected {})",
        snapshot.leagues.len(),
        snapshot.game_code,
        snapshot.season,
        snapshot.collected_at
    );
    Ok(snapshot)
}

#[instrument(skip(snapshot))]
pub async fn save_snapshot(path: &str, snapshot: &SnapshotFile) -> Result<(), AppError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, content).await?;
    info!("Saved snapshot with {} leagues", snapshot.leagues.len());
    Ok(())
}
