// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod prompts;
pub mod resolver;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "passgen", author, version, about = "Pseudo-random password generator", long_about = None)]
pub struct Args {
    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed the generator for reproducible output (never use for real passwords)
    #[arg(long, env = "PASSGEN_SEED", global = true)]
    pub seed: Option<u64>,

    /// Give up after this many rejected candidates (0 for no limit)
    #[arg(long, global = true)]
    pub max_attempts: Option<usize>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
