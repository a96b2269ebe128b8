use std::time::Duration;

use brewbump_common::config::Config;
use brewbump_common::error::{BrewbumpError, Result};
use brewbump_common::model::Release;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use sha2::{Digest, Sha256};
use tracing::{debug, error};

use crate::validation::validate_url;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT_STRING: &str = concat!(
    "brewbump/",
    env!("CARGO_PKG_VERSION"),
    " (Rust; Homebrew formula updater)"
);

pub fn build_http_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*"));
    Client::builder()
        .user_agent(USER_AGENT_STRING)
        .timeout(config.timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| BrewbumpError::HttpError(format!("Failed to build HTTP client: {e}")))
}

/// Downloads the release artifact and checks it against the digest the index reported.
///
/// The body is hashed as it streams in; nothing is written to disk.
pub async fn verify_remote_checksum(client: &Client, release: &Release) -> Result<()> {
    validate_url(&release.url)?;
    debug!("Downloading {} to verify its checksum", release.url);

    let mut response = client.get(&release.url).send().await.map_err(|e| {
        debug!("HTTP request failed for {}: {}", release.url, e);
        BrewbumpError::HttpError(format!("HTTP request failed for {}: {e}", release.url))
    })?;
    let status = response.status();
    debug!("Received HTTP status: {} for {}", status, release.url);

    if !status.is_success() {
        error!("HTTP error {} for URL {}", status, release.url);
        let reason = match status {
            StatusCode::NOT_FOUND => "Resource not found (404)".to_string(),
            StatusCode::FORBIDDEN => "Access forbidden (403)".to_string(),
            other => format!("HTTP status {other}"),
        };
        return Err(BrewbumpError::DownloadError(
            release.filename.clone(),
            release.url.clone(),
            reason,
        ));
    }

    let mut hasher = Sha256::new();
    let mut bytes_read: u64 = 0;
    while let Some(chunk) = response.chunk().await.map_err(|e| {
        BrewbumpError::HttpError(format!("Failed to read response body bytes: {e}"))
    })? {
        bytes_read += chunk.len() as u64;
        hasher.update(&chunk);
    }
    let actual = hex::encode(hasher.finalize());
    debug!("Calculated SHA256: {} ({} bytes read)", actual, bytes_read);
    debug!("Expected SHA256:   {}", release.sha256);

    if actual.eq_ignore_ascii_case(&release.sha256) {
        Ok(())
    } else {
        Err(BrewbumpError::ChecksumMismatch(format!(
            "Checksum mismatch for {}: expected {}, got {}",
            release.filename, release.sha256, actual
        )))
    }
}
