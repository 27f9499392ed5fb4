//! Country dataset fetching from the REST Countries API

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::Country;

/// Field set requested from the API; everything else is dropped server-side.
pub const FIELDS: &str = "name,capital,population,flags";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("country endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode country payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issue the single read-only GET for the country dataset. No retry, no
/// pagination; callers decide how a failure surfaces to the user.
pub async fn fetch_countries(config: &Config) -> Result<Vec<Country>, FetchError> {
    let client = Client::builder()
        .user_agent(&config.http.user_agent)
        .timeout(config.http_timeout())
        .build()?;

    let url = format!("{}?fields={}", config.endpoint, FIELDS);
    info!("Fetching country dataset from {}", url);

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await?;
    debug!("Received {} bytes of country data", body.len());

    let countries: Vec<Country> = serde_json::from_str(&body)?;
    info!("Fetched {} countries", countries.len());
    Ok(countries)
}
