// brewbump-core/src/fs.rs
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use brewbump_common::error::{BrewbumpError, Result};
use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

/// Reads a whole text file.
pub fn read_text(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(BrewbumpError::from)
}

/// Replaces `original_path` with `content` via a temp file in the same directory.
pub fn write_text_atomic(original_path: &Path, content: &str) -> Result<()> {
    let dir = match original_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Preserve original permissions if the file exists
    let original_perms = fs::metadata(original_path).map(|m| m.permissions()).ok();

    let mut temp_file = NamedTempFile::new_in(dir)?;
    let temp_path = temp_file.path().to_path_buf();

    debug!(
        "Atomically writing {} bytes to {} via temp file {}",
        content.len(),
        original_path.display(),
        temp_path.display()
    );

    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;

    temp_file.persist(original_path).map_err(|e| {
        error!(
            "Failed to persist/rename temporary text file {} over {}: {}",
            temp_path.display(),
            original_path.display(),
            e.error
        );
        BrewbumpError::Io(Arc::new(e.error))
    })?;

    if let Some(perms) = original_perms {
        if let Err(e) = fs::set_permissions(original_path, perms) {
            warn!(
                "Failed to restore original permissions on {}: {}",
                original_path.display(),
                e
            );
        }
    }
    Ok(())
}
