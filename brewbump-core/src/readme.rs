// brewbump-core/src/readme.rs
use std::path::Path;

use brewbump_common::error::{BrewbumpError, Result};
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use tracing::debug;

use crate::fs::{read_text, write_text_atomic};

lazy_static! {
    // Matches `- **Version**: 1.6.6`, including pre-release suffixes like `2.0.0rc1`.
    // The suffix never ends on punctuation, so a trailing `.` stays in the prose.
    static ref VERSION_LINE_RE: Regex = Regex::new(
        r"- \*\*Version\*\*: [0-9]+\.[0-9]+\.[0-9]+(?:[0-9A-Za-z.+!-]*[0-9A-Za-z])?"
    )
    .unwrap();
}

/// Rewrites every version line; returns the patched text and how many lines changed.
pub fn patch_readme(content: &str, version: &str) -> Result<(String, usize)> {
    let count = VERSION_LINE_RE.find_iter(content).count();
    if count == 0 {
        return Err(BrewbumpError::Readme(
            "No '- **Version**: X.Y.Z' line found".to_string(),
        ));
    }
    let line = format!("- **Version**: {version}");
    let patched = VERSION_LINE_RE.replace_all(content, NoExpand(line.as_str()));
    Ok((patched.into_owned(), count))
}

/// Points the README's version line at `version`.
///
/// Callers treat failures as warnings; the formula is the source of truth.
pub fn sync_readme(readme_path: &Path, version: &str) -> Result<usize> {
    let content = read_text(readme_path).map_err(|e| {
        BrewbumpError::Readme(format!("Could not read {}: {e}", readme_path.display()))
    })?;
    let (patched, count) = patch_readme(&content, version)?;
    if patched != content {
        write_text_atomic(readme_path, &patched).map_err(|e| {
            BrewbumpError::Readme(format!("Could not write {}: {e}", readme_path.display()))
        })?;
    }
    debug!(
        "Updated {} version line(s) in {}",
        count,
        readme_path.display()
    );
    Ok(count)
}
