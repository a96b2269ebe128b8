// brewbump-core/src/formula.rs
//! Reads and patches the `url`/`sha256` stanza of a Homebrew formula.
use std::io;
use std::path::Path;

use brewbump_common::error::{BrewbumpError, Result};
use brewbump_common::model::Release;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use tracing::debug;

use crate::fs::{read_text, write_text_atomic};

lazy_static! {
    static ref URL_FIELD_RE: Regex = Regex::new(r#"\burl\s+"([^"]+)""#).unwrap();
    static ref SHA256_FIELD_RE: Regex = Regex::new(r#"\bsha256\s+"([^"]+)""#).unwrap();
}

/// Download URL of the formula's main stanza. Resource blocks come later in the file.
pub fn find_download_url(content: &str) -> Option<&str> {
    URL_FIELD_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the version token from an sdist URL such as `.../corgea_cli-1.6.6.tar.gz`.
pub fn version_from_url(url: &str, sdist_stem: &str) -> Result<String> {
    let pattern = format!(r"{}-([^/]+)\.tar\.gz", regex::escape(sdist_stem));
    let re = Regex::new(&pattern)
        .map_err(|e| BrewbumpError::Formula(format!("Invalid filename pattern '{pattern}': {e}")))?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            BrewbumpError::Formula(format!(
                "Could not extract version from URL '{url}' (expected {sdist_stem}-<version>.tar.gz)"
            ))
        })
}

pub fn read_current_version(formula_path: &Path, sdist_stem: &str) -> Result<String> {
    let content = read_text(formula_path).map_err(|e| match e {
        BrewbumpError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            BrewbumpError::NotFound(format!(
                "Formula file {} not found",
                formula_path.display()
            ))
        }
        other => other,
    })?;
    let url = find_download_url(&content).ok_or_else(|| {
        BrewbumpError::Formula(format!(
            "Could not find URL in formula {}",
            formula_path.display()
        ))
    })?;
    debug!("Formula download URL: {}", url);
    version_from_url(url, sdist_stem)
}

/// Returns `content` with the first `url` and `sha256` fields pointing at `release`.
pub fn patch_formula(content: &str, release: &Release) -> Result<String> {
    if !URL_FIELD_RE.is_match(content) {
        return Err(BrewbumpError::Formula(
            "No url field to update in formula".to_string(),
        ));
    }
    if !SHA256_FIELD_RE.is_match(content) {
        return Err(BrewbumpError::Formula(
            "No sha256 field to update in formula".to_string(),
        ));
    }
    let url_field = format!(r#"url "{}""#, release.url);
    let sha_field = format!(r#"sha256 "{}""#, release.sha256);
    let patched = URL_FIELD_RE.replace(content, NoExpand(url_field.as_str()));
    let patched = SHA256_FIELD_RE.replace(&patched, NoExpand(sha_field.as_str()));
    Ok(patched.into_owned())
}

pub fn apply_update(formula_path: &Path, release: &Release) -> Result<()> {
    let content = read_text(formula_path)?;
    let patched = patch_formula(&content, release)?;
    write_text_atomic(formula_path, &patched)?;
    debug!(
        "Formula {} now points at {}",
        formula_path.display(),
        release.filename
    );
    Ok(())
}
