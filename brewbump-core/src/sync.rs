// brewbump-core/src/sync.rs
//! Fetch, compare, patch: the whole CI run.
use brewbump_common::config::Config;
use brewbump_common::error::Result;
use brewbump_common::model::Release;
use brewbump_net::{build_http_client, fetch_latest_release, verify_remote_checksum};
use tracing::{debug, error, info, warn};

use crate::formula::{apply_update, read_current_version};
use crate::outputs::{Outputs, CURRENT_VERSION, NEW_VERSION, UPDATE_NEEDED};
use crate::readme::sync_readme;

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Compare and emit outputs, but leave every file untouched.
    pub dry_run: bool,
    /// Hash the sdist before trusting the index digest.
    pub verify_checksum: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub current_version: String,
    pub release: Release,
    pub update_needed: bool,
    pub formula_updated: bool,
    pub readme_updated: bool,
}

impl SyncOutcome {
    pub fn new_version(&self) -> &str {
        &self.release.version
    }
}

pub async fn run_sync(
    config: &Config,
    options: SyncOptions,
    outputs: &Outputs,
) -> Result<SyncOutcome> {
    let formula_path = config.formula_path();
    debug!(
        "Syncing {} against {} (dry_run={}, verify_checksum={})",
        formula_path.display(),
        config.project_api_url(),
        options.dry_run,
        options.verify_checksum
    );

    let release = fetch_latest_release(config).await?;
    let current_version = read_current_version(&formula_path, &config.sdist_stem())?;

    info!("Current version: {}", current_version);
    info!("Latest version: {}", release.version);

    outputs.set(CURRENT_VERSION, &current_version)?;
    outputs.set(NEW_VERSION, &release.version)?;

    let mut outcome = SyncOutcome {
        current_version,
        release,
        update_needed: false,
        formula_updated: false,
        readme_updated: false,
    };

    if outcome.current_version == outcome.release.version {
        info!("No update needed - already at latest version");
        outputs.set_flag(UPDATE_NEEDED, false)?;
        return Ok(outcome);
    }

    info!(
        "Update needed: {} -> {}",
        outcome.current_version, outcome.release.version
    );
    outcome.update_needed = true;
    outputs.set_flag(UPDATE_NEEDED, true)?;

    if options.dry_run {
        info!("Dry run: leaving {} untouched", formula_path.display());
        return Ok(outcome);
    }

    if options.verify_checksum {
        let client = build_http_client(config)?;
        verify_remote_checksum(&client, &outcome.release).await?;
        debug!("Index digest confirmed for {}", outcome.release.filename);
    }

    if let Err(e) = apply_update(&formula_path, &outcome.release) {
        error!("Failed to update formula {}: {}", formula_path.display(), e);
        return Err(e);
    }
    outcome.formula_updated = true;
    info!(
        "Formula updated successfully to version {}",
        outcome.release.version
    );

    match sync_readme(config.readme_path(), &outcome.release.version) {
        Ok(_) => {
            outcome.readme_updated = true;
            info!(
                "{} updated with version {}",
                config.readme_path().display(),
                outcome.release.version
            );
        }
        Err(e) => warn!("Could not update {}: {}", config.readme_path().display(), e),
    }

    Ok(outcome)
}
