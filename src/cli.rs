use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run without the interactive shell.
/// That is the case when only config operations are requested, or when
/// `--fetch` collects league data without starting a session.
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || (args.fetch && args.no_shell)
}

/// Fantasy Trade Analyzer
///
/// Pick your league and team, build a trade block and sketch trades against
/// other teams in your league.
///
/// League data comes either from the configured fantasy API (`--fetch`) or
/// from a snapshot file written by an earlier fetch (`--snapshot`).
/// Type `help` in the shell for the list of commands.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Start the session from a previously saved snapshot file instead of the API.
    #[arg(long = "snapshot", value_name = "FILE", help_heading = "Data")]
    pub snapshot: Option<String>,

    /// Collect league data from the configured API. This is the default when
    /// no snapshot is given.
    #[arg(long = "fetch", help_heading = "Data", conflicts_with = "snapshot")]
    pub fetch: bool,

    /// Write the collected league data to this file.
    #[arg(long = "save-snapshot", value_name = "FILE", help_heading = "Data")]
    pub save_snapshot: Option<String>,

    /// Season year to collect. Overrides the configured season.
    #[arg(long = "season", help_heading = "Data")]
    pub season: Option<i32>,

    /// Collect (and save) league data, then exit without starting the shell.
    #[arg(long = "no-shell", help_heading = "Data", requires = "fetch")]
    pub no_shell: bool,

    /// Update API domain in config. Will prompt for new domain if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging. Logs are also written to stdout in this mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
