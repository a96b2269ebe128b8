use brewbump_common::config::Config;
use brewbump_common::error::Result;
use brewbump_core::formula::read_current_version;

#[derive(clap::Args, Debug)]
pub struct Current;

impl Current {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let formula_path = config.formula_path();
        tracing::debug!("Reading current version from {}", formula_path.display());
        let version = read_current_version(&formula_path, &config.sdist_stem())?;
        println!("{version}");
        Ok(())
    }
}
