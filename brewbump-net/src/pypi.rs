// brewbump-net/src/pypi.rs
use brewbump_common::config::Config;
use brewbump_common::error::{BrewbumpError, Result};
use brewbump_common::model::{PypiProject, Release};
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use crate::http::build_http_client;
use crate::validation::{validate_sha256_digest, validate_url};

async fn fetch_raw_project_json(client: &Client, config: &Config) -> Result<String> {
    let url = config.project_api_url();
    debug!("Fetching package metadata from index: {}", url);
    let response = client.get(&url).send().await.map_err(|e| {
        error!("HTTP request failed for {}: {}", url, e);
        BrewbumpError::from(e)
    })?;
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("(Failed to read response body: {e})"));
        debug!("HTTP request to {} returned non-success status: {}", url, status);
        debug!("Response body for failed request to {}: {}", url, body);
        return Err(match status {
            StatusCode::NOT_FOUND => BrewbumpError::NotFound(format!(
                "Package '{}' not found on index ({url})",
                config.package_name
            )),
            _ => BrewbumpError::Api(format!("HTTP status {status} from {url}")),
        });
    }
    let body = response.text().await?;
    if body.trim().is_empty() {
        error!("Response body for {} was empty.", url);
        return Err(BrewbumpError::Api(format!(
            "Empty response body received from {url}"
        )));
    }
    Ok(body)
}

pub async fn fetch_project(config: &Config) -> Result<PypiProject> {
    let client = build_http_client(config)?;
    let body = fetch_raw_project_json(&client, config).await?;
    let project: PypiProject = serde_json::from_str(&body)?;
    Ok(project)
}

/// Builds the release descriptor from the latest version's source distribution.
pub fn release_from_project(project: &PypiProject) -> Result<Release> {
    let version = project.latest_version();
    if version.trim().is_empty() {
        return Err(BrewbumpError::Api(
            "Index reported an empty latest version".to_string(),
        ));
    }

    let sdist = project.latest_source_archive().ok_or_else(|| {
        BrewbumpError::NotFound(format!(
            "No source distribution found for version {version}"
        ))
    })?;

    validate_url(&sdist.url)?;
    let sha256 = validate_sha256_digest(&sdist.digests.sha256)?;

    Ok(Release {
        version: version.to_string(),
        url: sdist.url.clone(),
        filename: sdist.filename.clone(),
        sha256,
    })
}

pub async fn fetch_latest_release(config: &Config) -> Result<Release> {
    let project = fetch_project(config).await?;
    let release = release_from_project(&project)?;
    debug!(
        "Latest release of {}: {} ({})",
        config.package_name, release.version, release.filename
    );
    Ok(release)
}
