pub mod collector;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use collector::{collect_leagues, fetch_league_snapshot};
pub use fetch_utils::fetch;
pub use http_client::create_http_client;
pub use urls::*;
