use crate::cli::Args;
use crossterm::{execute, terminal::SetTitle};
use fantasy_trade_analyzer::config::Config;
use fantasy_trade_analyzer::constants::APP_TITLE;
use fantasy_trade_analyzer::data_fetcher::{
    LeagueTables, SnapshotFile, fetch_league_snapshot, load_snapshot, save_snapshot,
};
use fantasy_trade_analyzer::error::AppError;
use std::io::stdout;
use tracing::{info, warn};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(APP_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// An empty `--config` value prompts for the new domain.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = Config::load_from_path(&config_path)
        .await
        .unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = if new_domain.is_empty() {
            fantasy_trade_analyzer::config::user_prompts::prompt_for_api_domain().await?
        } else {
            new_domain.clone()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Obtains the league data for a session: from `--snapshot` when given,
/// otherwise by collecting from the API. Collected data is written to
/// `--save-snapshot` when requested.
pub async fn load_league_data(args: &Args) -> Result<SnapshotFile, AppError> {
    if let Some(path) = &args.snapshot {
        return load_snapshot(path).await;
    }

    let mut config = Config::load().await?;
    if let Some(season) = args.season {
        config.season = Some(season);
    }
    config.validate()?;

    println!(
        "Collecting {} leagues for season {}...",
        config.game_code,
        config.effective_season()
    );
    let snapshot = fetch_league_snapshot(&config).await?;

    if snapshot.leagues.is_empty() {
        warn!("No league could be collected");
        return Err(AppError::no_leagues_found(
            &snapshot.game_code,
            snapshot.season,
        ));
    }

    if let Some(path) = &args.save_snapshot {
        save_snapshot(path, &snapshot).await?;
        println!("Saved {} leagues to {path}", snapshot.leagues.len());
    }

    Ok(snapshot)
}

/// Handles `--fetch --no-shell`: collect, save if requested, print a summary.
pub async fn handle_fetch_only_command(args: &Args) -> Result<(), AppError> {
    let snapshot = load_league_data(args).await?;
    let tables = LeagueTables::from_snapshot(&snapshot.leagues);

    for league in &snapshot.leagues {
        println!(
            "{} ({}, {}): {} teams",
            league.name,
            league.id,
            league.scoring_type,
            league.standings.len()
        );
    }
    info!(
        "Fetch finished: {} leagues, {} usable",
        snapshot.leagues.len(),
        tables.league_count()
    );
    Ok(())
}
