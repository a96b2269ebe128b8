// brewbump-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use super::error::{BrewbumpError, Result};

pub const DEFAULT_PACKAGE_NAME: &str = "corgea-cli";
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";
pub const DEFAULT_README_PATH: &str = "README.md";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub package_name: String,
    pub index_url: String,
    /// Explicit formula location. `None` means `Formula/<package>.rb`.
    pub formula_path: Option<PathBuf>,
    pub readme_path: PathBuf,
    pub timeout: Duration,
    /// File that receives `name=value` lines; stdout when unset.
    pub github_output: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading brewbump configuration");

        let package_name = env_non_empty("BREWBUMP_PACKAGE").unwrap_or_else(|| {
            debug!(
                "BREWBUMP_PACKAGE not set or empty, falling back to default: {}",
                DEFAULT_PACKAGE_NAME
            );
            DEFAULT_PACKAGE_NAME.to_string()
        });

        let index_url =
            env_non_empty("BREWBUMP_INDEX_URL").unwrap_or_else(|| DEFAULT_INDEX_URL.to_string());
        let formula_path = env_non_empty("BREWBUMP_FORMULA").map(PathBuf::from);
        let readme_path = env_non_empty("BREWBUMP_README")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_README_PATH));

        let timeout = match env_non_empty("BREWBUMP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_timeout_secs(&raw)?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let github_output = env_non_empty("GITHUB_OUTPUT").map(PathBuf::from);

        debug!("Configuration loaded successfully.");
        Ok(Self {
            package_name,
            index_url,
            formula_path,
            readme_path,
            timeout,
            github_output,
        })
    }

    pub fn formula_path(&self) -> PathBuf {
        self.formula_path.clone().unwrap_or_else(|| {
            Path::new("Formula").join(format!("{}.rb", self.package_name))
        })
    }

    pub fn readme_path(&self) -> &Path {
        &self.readme_path
    }

    /// JSON metadata endpoint for the configured package.
    pub fn project_api_url(&self) -> String {
        format!(
            "{}/{}/json",
            self.index_url.trim_end_matches('/'),
            self.package_name
        )
    }

    /// Stem used in sdist filenames, e.g. `corgea-cli` -> `corgea_cli`.
    pub fn sdist_stem(&self) -> String {
        normalize_sdist_stem(&self.package_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            index_url: DEFAULT_INDEX_URL.to_string(),
            formula_path: None,
            readme_path: PathBuf::from(DEFAULT_README_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            github_output: None,
        }
    }
}

pub fn parse_timeout_secs(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(BrewbumpError::Config(
            "timeout must be at least one second".to_string(),
        )),
        Ok(secs) => Ok(secs),
        Err(e) => Err(BrewbumpError::Config(format!(
            "invalid timeout '{raw}': {e}"
        ))),
    }
}

pub fn normalize_sdist_stem(package_name: &str) -> String {
    package_name
        .chars()
        .map(|c| if c == '-' || c == '.' { '_' } else { c })
        .collect()
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}
