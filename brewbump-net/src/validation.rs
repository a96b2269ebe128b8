// brewbump-net/src/validation.rs
use brewbump_common::error::{BrewbumpError, Result};
use url::{Host, Url};

const SHA256_HEX_LEN: usize = 64;

/// Validates a URL, ensuring it uses the HTTPS scheme.
///
/// Plain `http` is tolerated for loopback hosts so a local mirror of the index can be used.
pub fn validate_url(url_str: &str) -> Result<()> {
    let url = Url::parse(url_str).map_err(|e| {
        BrewbumpError::ValidationError(format!("Failed to parse URL '{url_str}': {e}"))
    })?;
    match url.scheme() {
        "https" => Ok(()),
        "http" if is_loopback(&url) => {
            tracing::debug!("Accepting plain http for loopback URL {}", url_str);
            Ok(())
        }
        other => Err(BrewbumpError::ValidationError(format!(
            "Invalid URL scheme for '{url_str}': Must be https, but got '{other}'"
        ))),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

/// Checks that `digest` is a hex-encoded SHA-256 and returns it lowercased.
pub fn validate_sha256_digest(digest: &str) -> Result<String> {
    if digest.len() == SHA256_HEX_LEN && digest.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(digest.to_ascii_lowercase())
    } else {
        Err(BrewbumpError::ValidationError(format!(
            "'{digest}' is not a {SHA256_HEX_LEN}-character hex SHA-256 digest"
        )))
    }
}
