//! League collection: walks the fantasy API and assembles league snapshots.

use reqwest::Client;
use tracing::{error, info, instrument, warn};

use super::fetch_utils::fetch;
use super::http_client::create_http_client;
use super::urls::{
    build_league_ids_url, build_league_settings_url, build_roster_url, build_standings_url,
    build_stat_categories_url, build_teams_url, normalize_api_domain,
};
use crate::config::Config;
use crate::data_fetcher::models::{
    LeagueId, LeagueIdsResponse, LeagueSettings, LeagueSnapshot, RosterPlayer, ScoringType,
    SnapshotFile, StandingsEntry, StatCategory, TeamSnapshot, TeamsResponse,
};
use crate::error::AppError;

/// Collects every league of the configured game and season into a snapshot.
#[instrument(skip(config), fields(game_code = %config.game_code))]
pub async fn fetch_league_snapshot(config: &Config) -> Result<SnapshotFile, AppError> {
    let client = create_http_client(config.http_timeout_seconds, config.api_token.as_deref())?;
    let season = config.effective_season();
    let api_domain = normalize_api_domain(&config.api_domain);
    let leagues = collect_leagues(&client, &api_domain, &config.game_code, season).await?;
    Ok(SnapshotFile::new(config.game_code.clone(), season, leagues))
}

/// Collects all leagues for `game_code`/`season`.
///
/// A league whose settings, standings or teams cannot be fetched is logged
/// and skipped. Missing categories or rosters degrade to empty lists.
pub async fn collect_leagues(
    client: &Client,
    api_domain: &str,
    game_code: &str,
    season: i32,
) -> Result<Vec<LeagueSnapshot>, AppError> {
    let ids: LeagueIdsResponse =
        fetch(client, &build_league_ids_url(api_domain, game_code, season)).await?;

    if ids.league_ids.is_empty() {
        return Err(AppError::no_leagues_found(game_code, season));
    }

    info!("Collecting data for {} leagues", ids.league_ids.len());

    let mut leagues = Vec::with_capacity(ids.league_ids.len());
    for (idx, league_id) in ids.league_ids.iter().enumerate() {
        info!(
            "Processing league {}/{}: {}",
            idx + 1,
            ids.league_ids.len(),
            league_id
        );
        match collect_league(client, api_domain, league_id).await {
            Ok(league) => leagues.push(league),
            Err(e) if e.is_retryable() => warn!(
                "Skipping league {league_id} after transient error: {e} (try again in {}s)",
                e.retry_delay_seconds().unwrap_or_default()
            ),
            Err(e) => error!("Error processing league {league_id}: {e}"),
        }
    }

    info!("Collected {} of {} leagues", leagues.len(), ids.league_ids.len());
    Ok(leagues)
}

#[instrument(skip(client, api_domain))]
async fn collect_league(
    client: &Client,
    api_domain: &str,
    league_id: &str,
) -> Result<LeagueSnapshot, AppError> {
    let settings: LeagueSettings =
        fetch(client, &build_league_settings_url(api_domain, league_id)).await?;

    let name = settings
        .name
        .unwrap_or_else(|| format!("League {league_id}"));
    let scoring_type = ScoringType::from(
        settings
            .scoring_type
            .unwrap_or_else(|| "unknown".to_string()),
    );

    let categories = if scoring_type.is_head() {
        fetch_categories(client, api_domain, league_id).await
    } else {
        Vec::new()
    };

    let standings: Vec<StandingsEntry> =
        fetch(client, &build_standings_url(api_domain, league_id)).await?;
    let teams: TeamsResponse = fetch(client, &build_teams_url(api_domain, league_id)).await?;

    let mut team_snapshots = Vec::with_capacity(teams.len());
    for (team_key, details) in teams {
        let roster = fetch_roster(client, api_domain, &team_key).await;
        let manager = details
            .managers
            .into_iter()
            .next()
            .map(|entry| entry.manager)
            .unwrap_or_default();

        team_snapshots.push(TeamSnapshot {
            name: details.name.unwrap_or_else(|| "Unknown Team".to_string()),
            team_key,
            team_id: details.team_id,
            roster,
            manager_nickname: manager.nickname,
            manager_email: manager.email,
            waiver_priority: details.waiver_priority,
            number_of_moves: details.number_of_moves,
            number_of_trades: details.number_of_trades,
        });
    }

    Ok(LeagueSnapshot {
        id: LeagueId::new(league_id),
        name,
        scoring_type,
        categories,
        standings: standings.into_iter().map(|entry| entry.name).collect(),
        teams: team_snapshots,
    })
}

async fn fetch_categories(client: &Client, api_domain: &str, league_id: &str) -> Vec<String> {
    match fetch::<Vec<StatCategory>>(client, &build_stat_categories_url(api_domain, league_id))
        .await
    {
        Ok(categories) => categories.into_iter().map(|c| c.display_name).collect(),
        Err(e) => {
            warn!("No stat categories for league {league_id}: {e}");
            Vec::new()
        }
    }
}

async fn fetch_roster(client: &Client, api_domain: &str, team_key: &str) -> Vec<String> {
    match fetch::<Vec<RosterPlayer>>(client, &build_roster_url(api_domain, team_key)).await {
        Ok(players) => players.into_iter().map(|p| p.name).collect(),
        Err(e) => {
            warn!("No roster for team {team_key}: {e}");
            Vec::new()
        }
    }
}
