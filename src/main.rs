// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use lba_classic_audio::convert::config::DEFAULT_PASSES;

mod cli;
mod commands;

use cli::{Cli, Commands, DEFAULT_DATA_DIR, DEFAULT_ENCODER};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        // Bare invocation converts everything with the defaults
        None => commands::run(
            PathBuf::from(DEFAULT_DATA_DIR),
            DEFAULT_PASSES,
            PathBuf::from(DEFAULT_ENCODER),
        ),
        Some(Commands::Run {
            data_dir,
            passes,
            encoder,
        }) => commands::run(data_dir, passes, encoder),
        Some(Commands::Voices {
            game,
            data_dir,
            passes,
            encoder,
        }) => commands::voices(game, data_dir, passes, encoder),
        Some(Commands::Samples {
            game,
            data_dir,
            passes,
            encoder,
        }) => commands::samples(game, data_dir, passes, encoder),
        Some(Commands::List { archive }) => commands::list(archive),
    }
}
