//! URL building utilities for fantasy API endpoints

/// Base URL for a configured API domain: `https://` is assumed when no
/// scheme is given, and trailing slashes are dropped.
pub fn normalize_api_domain(api_domain: &str) -> String {
    let trimmed = api_domain.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Builds the URL listing the league ids a user belongs to for a game and season.
///
/// # Example
/// ```
/// use fantasy_trade_analyzer::data_fetcher::api::build_league_ids_url;
///
/// let url = build_league_ids_url("https://api.example.com", "nhl", 2025);
/// assert_eq!(url, "https://api.example.com/games/nhl/leagues?season=2025");
/// ```
pub fn build_league_ids_url(api_domain: &str, game_code: &str, season: i32) -> String {
    format!("{api_domain}/games/{game_code}/leagues?season={season}")
}

/// Builds the URL for a league's settings (name, scoring type).
pub fn build_league_settings_url(api_domain: &str, league_id: &str) -> String {
    format!("{api_domain}/leagues/{league_id}/settings")
}

/// Builds the URL for a league's stat categories.
pub fn build_stat_categories_url(api_domain: &str, league_id: &str) -> String {
    format!("{api_domain}/leagues/{league_id}/stat_categories")
}

/// Builds the URL for a league's standings.
///
/// # Example
/// ```
/// use fantasy_trade_analyzer::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", "453.l.1");
/// assert_eq!(url, "https://api.example.com/leagues/453.l.1/standings");
/// ```
pub fn build_standings_url(api_domain: &str, league_id: &str) -> String {
    format!("{api_domain}/leagues/{league_id}/standings")
}

/// Builds the URL for the team details of a league.
pub fn build_teams_url(api_domain: &str, league_id: &str) -> String {
    format!("{api_domain}/leagues/{league_id}/teams")
}

/// Builds the URL for a team's current roster.
pub fn build_roster_url(api_domain: &str, team_key: &str) -> String {
    format!("{api_domain}/teams/{team_key}/roster")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_urls() {
        let domain = "https://api.example.com";
        assert_eq!(
            build_league_settings_url(domain, "453.l.1"),
            "https://api.example.com/leagues/453.l.1/settings"
        );
        assert_eq!(
            build_stat_categories_url(domain, "453.l.1"),
            "https://api.example.com/leagues/453.l.1/stat_categories"
        );
        assert_eq!(
            build_teams_url(domain, "453.l.1"),
            "https://api.example.com/leagues/453.l.1/teams"
        );
    }

    #[test]
    fn test_normalize_api_domain() {
        assert_eq!(
            normalize_api_domain("api.example.com/"),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_api_domain("http://localhost:8080"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_roster_url() {
        assert_eq!(
            build_roster_url("http://localhost:8080", "453.l.1.t.4"),
            "http://localhost:8080/teams/453.l.1.t.4/roster"
        );
    }
}
