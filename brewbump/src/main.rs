// brewbump/src/main.rs
use std::process;

use brewbump_common::config::Config;
use brewbump_common::error::Result as bbResult;
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::CliArgs;

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("BREWBUMP_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

fn load_config(cli_args: &CliArgs) -> bbResult<Config> {
    let mut config = Config::load()?;
    cli_args.overrides.apply(&mut config)?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    let config = match load_config(&cli_args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            process::exit(1);
        }
    };
    debug!("Effective configuration: {:?}", config);

    if let Err(e) = cli_args.command.run(&config).await {
        tracing::error!("Command failed: {:#}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
}
