use clap::Parser;
use folio_core::storage::config::Config;
use log::{LevelFilter, debug, error};
use std::process;
use std::str::FromStr;

mod cli;

use cli::dispatcher::{Dispatcher, Outcome};
use cli::main_types::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    let config_path = Config::path_in(cli.config_dir.as_deref());
    debug!("Config path override: {:?}", config_path);

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            process::exit(1);
        }
    };

    let dispatcher = Dispatcher::new(config, config_path, cli.content);

    match dispatcher.dispatch(cli.command).await {
        Ok(Outcome::Success) => {}
        Ok(Outcome::Failure) => process::exit(1),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.display_friendly());
            process::exit(1);
        }
    }
}
