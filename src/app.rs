use crossterm::{execute, terminal::SetTitle};
use fantasy_trade_analyzer::constants::APP_TITLE;
use fantasy_trade_analyzer::data_fetcher::{LeagueTables, SnapshotFile};
use fantasy_trade_analyzer::error::AppError;
use fantasy_trade_analyzer::ui::Shell;
use std::io::stdout;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

/// Run the interactive shell.
///
/// - Builds the league tables once; the session only reads them
/// - Sets the terminal title
/// - Reads commands from stdin until `quit` or end of input
pub async fn run_interactive(snapshot: SnapshotFile) -> Result<(), AppError> {
    let tables = Arc::new(LeagueTables::from_snapshot(&snapshot.leagues));
    info!(
        "Starting session with {} leagues ({} {})",
        tables.league_count(),
        snapshot.game_code,
        snapshot.season
    );

    let mut out = stdout();
    execute!(out, SetTitle(APP_TITLE))?;

    let mut shell = Shell::new(tables);
    shell
        .run(BufReader::new(tokio::io::stdin()), &mut out)
        .await
}
