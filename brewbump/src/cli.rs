// brewbump/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::PathBuf;

use brewbump_common::config::parse_timeout_secs;
use brewbump_common::error::Result;
use brewbump_common::Config;
use clap::{ArgAction, Args, Parser, Subcommand};

// Module declarations
pub mod current;
pub mod latest;
pub mod sync;

use crate::cli::current::Current;
use crate::cli::latest::Latest;
use crate::cli::sync::SyncArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "brewbump", bin_name = "brewbump")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags that take precedence over the `BREWBUMP_*` environment.
#[derive(Args, Debug, Default)]
pub struct ConfigOverrides {
    /// PyPI project name
    #[arg(long, global = true)]
    pub package: Option<String>,

    /// Base URL of the JSON API, e.g. https://pypi.org/pypi
    #[arg(long, global = true)]
    pub index_url: Option<String>,

    /// Formula to patch [default: Formula/<package>.rb]
    #[arg(long, global = true)]
    pub formula: Option<PathBuf>,

    /// README holding the `- **Version**:` line
    #[arg(long, global = true)]
    pub readme: Option<PathBuf>,

    /// Network timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(package) = &self.package {
            config.package_name = package.clone();
        }
        if let Some(index_url) = &self.index_url {
            config.index_url = index_url.clone();
        }
        if let Some(formula) = &self.formula {
            config.formula_path = Some(formula.clone());
        }
        if let Some(readme) = &self.readme {
            config.readme_path = readme.clone();
        }
        if let Some(timeout) = &self.timeout {
            config.timeout = std::time::Duration::from_secs(parse_timeout_secs(timeout)?);
        }
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the index and patch the formula and README if a new release exists
    Sync(SyncArgs),
    /// Print the version the formula currently points at
    Current(Current),
    /// Print the latest source release reported by the index
    Latest(Latest),
}

impl Command {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Sync(command) => command.run(config).await,
            Self::Current(command) => command.run(config).await,
            Self::Latest(command) => command.run(config).await,
        }
    }
}
