use fantasy_trade_analyzer::{
    config::Config,
    constants::{DEFAULT_GAME_CODE, DEFAULT_HTTP_TIMEOUT_SECONDS},
    data_fetcher::{LeagueDataProvider, LeagueTables},
    testing_utils::{PropertyTesting, TestDataBuilder},
    ui::{Shell, Step, parse_command},
};
use std::sync::Arc;
use tempfile::tempdir;

/// Test configuration round trip through TOML
#[tokio::test]
async fn test_config_serialization() {
    let configs = vec![
        Config {
            api_domain: "https://api.example.com".to_string(),
            ..Config::default()
        },
        Config {
            api_domain: "http://api.example.com".to_string(),
            api_token: Some("token".to_string()),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 10,
            game_code: "nfl".to_string(),
            season: Some(2024),
        },
    ];

    for config in configs {
        let config_str = toml::to_string_pretty(&config).unwrap();
        let loaded_config: Config = toml::from_str(&config_str).unwrap();
        assert_eq!(loaded_config, config);
    }
}

/// Test that a minimal config file gets defaults for everything else
#[tokio::test]
async fn test_config_integration() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    tokio::fs::write(&config_path, "api_domain = \"https://api.test.com\"\n")
        .await
        .unwrap();

    let loaded_config = Config::load_from_path(&config_path.to_string_lossy())
        .await
        .unwrap();

    assert_eq!(loaded_config.api_domain, "https://api.test.com");
    assert_eq!(loaded_config.log_file_path, None);
    assert_eq!(loaded_config.api_token, None);
    assert_eq!(loaded_config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    assert_eq!(loaded_config.game_code, DEFAULT_GAME_CODE);
    assert!(loaded_config.validate().is_ok());
}

/// Duplicate league and team names keep their first occurrence
#[test]
fn test_tables_keep_first_occurrence() {
    let mut leagues = TestDataBuilder::create_sample_leagues();
    leagues.push(TestDataBuilder::create_league(
        "4",
        "Category League",
        "point",
        &[("Team A", &["Imposter"]), ("Team Z", &["Player9"])],
    ));

    let tables = LeagueTables::from_snapshot(&leagues);

    assert_eq!(tables.league_count(), 3);
    assert!(
        tables
            .lookup_league("Category League")
            .unwrap()
            .scoring_type
            .is_head()
    );
    assert_eq!(tables.lookup_roster("Team A"), ["Player1", "Player2"]);
    assert_eq!(tables.lookup_roster("Team Z"), ["Player9"]);
    assert_eq!(tables.lookup_categories("Category League"), ["Goals", "Assists"]);
}

/// Sample fixtures satisfy the collected-data invariants
#[test]
fn test_sample_data_properties() {
    for league in TestDataBuilder::create_sample_leagues() {
        PropertyTesting::validate_league(&league).unwrap();
        PropertyTesting::validate_rosters(&league).unwrap();
    }
}

/// A full shell session driven by typed commands
#[test]
fn test_shell_trade_flow() {
    let mut shell = Shell::new(Arc::new(TestDataBuilder::create_sample_tables()));

    for line in [
        "league Category League",
        "team Team A",
        "continue",
        "offer Player1",
        "partner Team B",
        "want Player3, Player4",
    ] {
        let step = shell.execute(parse_command(line).unwrap().unwrap());
        assert!(
            !matches!(step, Step::Rejected(_)),
            "'{line}' should be accepted"
        );
    }

    let step = shell.execute(parse_command("trade").unwrap().unwrap());
    let Step::Handled(report) = step else {
        panic!("trade should dispatch an event");
    };
    assert!(report.refreshed.is_empty());
    assert!(shell.controller().trade_blocks().is_empty());

    // Players from a team outside the partner's roster are refused
    let step = shell.execute(parse_command("want Player5").unwrap().unwrap());
    assert!(matches!(step, Step::Rejected(_)));
}
