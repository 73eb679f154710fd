use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_builder::cli::{handle_command, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    handle_command(Cli::parse())
}
