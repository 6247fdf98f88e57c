use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, config_warnings) = Config::load();

    match logging::init(&config) {
        Ok(()) => {
            for warning in &config_warnings {
                log::warn!("{}", warning);
            }
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialise logging: {}", e);
            for warning in &config_warnings {
                eprintln!("⚠️  {}", warning);
            }
        }
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    if let Err(e) = ctrlc::set_handler(|| {
        log::info!("🔴 Ctrl+C received. Exiting...");
        std::process::exit(130);
    }) {
        log::warn!("Failed to set Ctrl+C handler: {}", e);
    }

    match cli::handlers::run(args, &config) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
