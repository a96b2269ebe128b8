use brewbump_common::config::Config;
use brewbump_common::error::Result;
use brewbump_net::fetch_latest_release;

#[derive(clap::Args, Debug)]
pub struct Latest {
    /// Print the release descriptor as JSON
    #[arg(long)]
    pub json: bool,
}

impl Latest {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let release = fetch_latest_release(config).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&release)?);
        } else {
            println!("version:  {}", release.version);
            println!("filename: {}", release.filename);
            println!("url:      {}", release.url);
            println!("sha256:   {}", release.sha256);
        }
        Ok(())
    }
}
