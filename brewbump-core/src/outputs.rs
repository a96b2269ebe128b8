// brewbump-core/src/outputs.rs
//! Step outputs for GitHub Actions.
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use brewbump_common::config::Config;
use brewbump_common::error::{BrewbumpError, Result};
use tracing::debug;

pub const CURRENT_VERSION: &str = "current_version";
pub const NEW_VERSION: &str = "new_version";
pub const UPDATE_NEEDED: &str = "update_needed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append `name=value` lines to the file named by `GITHUB_OUTPUT`.
    File(PathBuf),
    /// Legacy `::set-output` workflow commands on stdout.
    Stdout,
}

#[derive(Debug, Clone)]
pub struct Outputs {
    sink: OutputSink,
}

impl Outputs {
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.github_output {
            Some(path) => Self::new(OutputSink::File(path.clone())),
            None => Self::new(OutputSink::Stdout),
        }
    }

    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        if value.contains('\n') || value.contains('\r') {
            return Err(BrewbumpError::Output(format!(
                "Refusing multi-line value for output '{name}'"
            )));
        }
        match &self.sink {
            OutputSink::File(path) => {
                debug!("Writing output {}={} to {}", name, value, path.display());
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        BrewbumpError::Output(format!("Cannot open {}: {e}", path.display()))
                    })?;
                file.write_all(file_line(name, value).as_bytes())
                    .map_err(|e| {
                        BrewbumpError::Output(format!("Cannot write {}: {e}", path.display()))
                    })?;
            }
            OutputSink::Stdout => println!("{}", legacy_line(name, value)),
        }
        Ok(())
    }

    pub fn set_flag(&self, name: &str, value: bool) -> Result<()> {
        self.set(name, if value { "true" } else { "false" })
    }
}

pub fn file_line(name: &str, value: &str) -> String {
    format!("{name}={value}\n")
}

pub fn legacy_line(name: &str, value: &str) -> String {
    format!("::set-output name={name}::{value}")
}
