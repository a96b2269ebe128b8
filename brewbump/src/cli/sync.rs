//! Contains the logic for the `sync` command.
use brewbump_common::config::Config;
use brewbump_common::error::Result;
use brewbump_core::{run_sync, Outputs, SyncOptions};
use colored::Colorize;

#[derive(clap::Args, Debug)]
pub struct SyncArgs {
    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Download the sdist and check it against the index digest before patching
    #[arg(long)]
    pub verify_checksum: bool,
}

impl SyncArgs {
    pub async fn run(&self, config: &Config) -> Result<()> {
        tracing::debug!("Running sync for {}", config.package_name);
        println!(
            "{}{}",
            "==> ".bold().blue(),
            format!("Checking for new {} version...", config.package_name).bold()
        );

        let outputs = Outputs::from_config(config);
        let options = SyncOptions {
            dry_run: self.dry_run,
            verify_checksum: self.verify_checksum,
        };
        let outcome = run_sync(config, options, &outputs).await?;

        if !outcome.update_needed {
            println!(
                "Already at latest version {}",
                outcome.current_version.green()
            );
        } else if !outcome.formula_updated {
            println!(
                "Update available: {} -> {} (dry run, nothing written)",
                outcome.current_version,
                outcome.new_version().yellow()
            );
        } else if outcome.readme_updated {
            println!(
                "Formula and README updated: {} -> {}",
                outcome.current_version,
                outcome.new_version().green()
            );
        } else {
            println!(
                "Formula updated: {} -> {} ({} left unchanged)",
                outcome.current_version,
                outcome.new_version().green(),
                config.readme_path().display()
            );
        }
        Ok(())
    }
}
