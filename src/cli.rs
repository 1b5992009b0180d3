// src/cli.rs
//! CLI definitions for the audio conversion tool
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lba_classic_audio::Title;
use lba_classic_audio::convert::config::DEFAULT_PASSES;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_ENCODER: &str = "ffmpeg";

#[derive(Parser)]
#[command(name = "lba-classic-audio")]
#[command(version)]
#[command(about = "Repack Little Big Adventure audio archives with Ogg Vorbis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every known title: sound effects first, then voices
    Run {
        /// Root directory holding one folder per title
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Encoder passes applied to every payload
        #[arg(long, default_value_t = DEFAULT_PASSES)]
        passes: u32,

        /// Encoder binary to invoke
        #[arg(long, default_value = DEFAULT_ENCODER)]
        encoder: PathBuf,
    },

    /// Convert the voice archives of a single title
    Voices {
        /// Title to convert
        #[arg(value_enum)]
        game: Title,

        /// Root directory holding one folder per title
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Encoder passes applied to every payload
        #[arg(long, default_value_t = DEFAULT_PASSES)]
        passes: u32,

        /// Encoder binary to invoke
        #[arg(long, default_value = DEFAULT_ENCODER)]
        encoder: PathBuf,
    },

    /// Convert the sound-effect archive of a single title
    Samples {
        /// Title to convert
        #[arg(value_enum)]
        game: Title,

        /// Root directory holding one folder per title
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Encoder passes applied to every payload
        #[arg(long, default_value_t = DEFAULT_PASSES)]
        passes: u32,

        /// Encoder binary to invoke
        #[arg(long, default_value = DEFAULT_ENCODER)]
        encoder: PathBuf,
    },

    /// Print the slot table of an HQR archive
    List {
        /// Archive to inspect
        archive: PathBuf,
    },
}
