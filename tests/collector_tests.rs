use fantasy_trade_analyzer::{
    config::Config,
    data_fetcher::{
        LeagueTables, LeagueDataProvider, api::create_http_client, collect_leagues,
        fetch_league_snapshot,
    },
    error::AppError,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mounts a head-to-head league "1" with two teams and a points league "2"
/// with one team.
async fn mount_two_leagues(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/games/nhl/leagues"))
        .and(query_param("season", "2025"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"league_ids": ["1", "2"]})),
        )
        .mount(server)
        .await;

    mount_json(
        server,
        "/leagues/1/settings",
        json!({"name": "Category League", "scoring_type": "head"}),
    )
    .await;
    mount_json(
        server,
        "/leagues/1/stat_categories",
        json!([{"display_name": "Goals"}, {"display_name": "Assists"}]),
    )
    .await;
    mount_json(
        server,
        "/leagues/1/standings",
        json!([
            {"team_key": "1.t.2", "name": "Team B"},
            {"team_key": "1.t.1", "name": "Team A"}
        ]),
    )
    .await;
    mount_json(
        server,
        "/leagues/1/teams",
        json!({
            "1.t.1": {
                "name": "Team A",
                "team_id": "1",
                "managers": [{"manager": {"nickname": "alex"}}],
                "waiver_priority": 2,
                "number_of_moves": "5",
                "number_of_trades": 0
            },
            "1.t.2": {"name": "Team B", "team_id": 2}
        }),
    )
    .await;
    mount_json(
        server,
        "/teams/1.t.1/roster",
        json!([{"name": "Player1"}, {"name": "Player2"}]),
    )
    .await;
    mount_json(server, "/teams/1.t.2/roster", json!([{"name": "Player3"}])).await;

    mount_json(
        server,
        "/leagues/2/settings",
        json!({"name": "Points League", "scoring_type": "point"}),
    )
    .await;
    mount_json(
        server,
        "/leagues/2/standings",
        json!([{"team_key": "2.t.1", "name": "Team X"}]),
    )
    .await;
    mount_json(server, "/leagues/2/teams", json!({"2.t.1": {"name": "Team X"}})).await;
    mount_json(server, "/teams/2.t.1/roster", json!([{"name": "Player6"}])).await;
}

#[tokio::test]
async fn test_collect_leagues_builds_snapshots() {
    let server = MockServer::start().await;
    mount_two_leagues(&server).await;

    let client = create_http_client(5, None).unwrap();
    let leagues = collect_leagues(&client, &server.uri(), "nhl", 2025)
        .await
        .unwrap();

    assert_eq!(leagues.len(), 2);

    let category = &leagues[0];
    assert_eq!(category.id.as_str(), "1");
    assert!(category.scoring_type.is_head());
    assert_eq!(category.categories, vec!["Goals", "Assists"]);
    // Standings keep the API ranking
    assert_eq!(category.standings, vec!["Team B", "Team A"]);
    let team_a = category.teams.iter().find(|t| t.name == "Team A").unwrap();
    assert_eq!(team_a.roster, vec!["Player1", "Player2"]);
    assert_eq!(team_a.team_key, "1.t.1");
    assert_eq!(team_a.manager_nickname.as_deref(), Some("alex"));
    assert_eq!(team_a.number_of_moves, Some(5));

    let points = &leagues[1];
    assert!(!points.scoring_type.is_head());
    assert!(points.categories.is_empty());
    assert_eq!(points.teams[0].roster, vec!["Player6"]);

    let tables = LeagueTables::from_snapshot(&leagues);
    assert_eq!(tables.league_names(), vec!["Category League", "Points League"]);
    assert_eq!(tables.lookup_roster("Team B"), ["Player3"]);
}

#[tokio::test]
async fn test_failing_league_is_skipped() {
    let server = MockServer::start().await;

    mount_json(&server, "/games/nhl/leagues", json!({"league_ids": ["7", "8"]})).await;
    mount_status(&server, "/leagues/7/settings", 404).await;
    mount_json(
        &server,
        "/leagues/8/settings",
        json!({"name": "Survivor", "scoring_type": "point"}),
    )
    .await;
    mount_json(&server, "/leagues/8/standings", json!([])).await;
    mount_json(&server, "/leagues/8/teams", json!({})).await;

    let client = create_http_client(5, None).unwrap();
    let leagues = collect_leagues(&client, &server.uri(), "nhl", 2025)
        .await
        .unwrap();

    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].name, "Survivor");
}

#[tokio::test]
async fn test_missing_roster_and_categories_degrade_to_empty() {
    let server = MockServer::start().await;

    mount_json(&server, "/games/nhl/leagues", json!({"league_ids": ["3"]})).await;
    mount_json(&server, "/leagues/3/settings", json!({"scoring_type": "head"})).await;
    mount_status(&server, "/leagues/3/stat_categories", 404).await;
    mount_json(
        &server,
        "/leagues/3/standings",
        json!([{"team_key": "3.t.1", "name": "Lonely"}]),
    )
    .await;
    mount_json(&server, "/leagues/3/teams", json!({"3.t.1": {}})).await;
    mount_status(&server, "/teams/3.t.1/roster", 404).await;

    let client = create_http_client(5, None).unwrap();
    let leagues = collect_leagues(&client, &server.uri(), "nhl", 2025)
        .await
        .unwrap();

    let league = &leagues[0];
    assert_eq!(league.name, "League 3");
    assert!(league.categories.is_empty());
    assert_eq!(league.teams[0].name, "Unknown Team");
    assert!(league.teams[0].roster.is_empty());
}

#[tokio::test]
async fn test_no_league_ids_is_an_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/games/nhl/leagues", json!({"league_ids": []})).await;

    let client = create_http_client(5, None).unwrap();
    let result = collect_leagues(&client, &server.uri(), "nhl", 2025).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::NoLeaguesFound { season: 2025, .. }
    ));
}

#[tokio::test]
async fn test_fetch_league_snapshot_sends_token_and_season() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/nhl/leagues"))
        .and(query_param("season", "2023"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"league_ids": ["9"]})))
        .mount(&server)
        .await;
    mount_json(
        &server,
        "/leagues/9/settings",
        json!({"name": "Old League", "scoring_type": "point"}),
    )
    .await;
    mount_json(&server, "/leagues/9/standings", json!([])).await;
    mount_json(&server, "/leagues/9/teams", json!({})).await;

    let config = Config {
        api_domain: server.uri(),
        api_token: Some("secret".to_string()),
        season: Some(2023),
        http_timeout_seconds: 5,
        ..Config::default()
    };
    let snapshot = fetch_league_snapshot(&config).await.unwrap();

    assert_eq!(snapshot.game_code, "nhl");
    assert_eq!(snapshot.season, 2023);
    assert_eq!(snapshot.leagues[0].name, "Old League");
}
