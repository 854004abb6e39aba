//! User prompts for configuration setup
//!
//! Used when no config file exists and the API domain is not provided
//! through the environment.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the fantasy API domain and returns the trimmed input.
pub async fn prompt_for_api_domain() -> Result<String, AppError> {
    println!("Please enter your fantasy API domain: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
