// src/commands.rs
//! Command handlers for the conversion CLI

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::info;

use lba_classic_audio::convert::{ConvertConfig, SampleConverter, VoiceConverter};
use lba_classic_audio::encode::Encoder;
use lba_classic_audio::{Title, batch};
use lba_hqr::{Entry, Hqr};

fn build_config(data_dir: PathBuf, passes: u32, encoder: PathBuf) -> Result<ConvertConfig> {
    if passes == 0 {
        bail!("--passes must be at least 1");
    }
    Ok(ConvertConfig {
        data_root: data_dir,
        passes,
        encoder: Encoder::new(encoder),
        ..ConvertConfig::default()
    })
}

/// Full batch run over every known title.
pub fn run(data_dir: PathBuf, passes: u32, encoder: PathBuf) -> Result<()> {
    let config = build_config(data_dir, passes, encoder)?;
    batch::run(&config)?;
    info!("Batch conversion finished");
    Ok(())
}

/// Convert the voice archives of one title.
pub fn voices(game: Title, data_dir: PathBuf, passes: u32, encoder: PathBuf) -> Result<()> {
    let config = build_config(data_dir, passes, encoder)?;
    let converter = VoiceConverter::new(&config, game);
    converter.run()?;
    converter.cleanup_language_dirs()?;
    Ok(())
}

/// Convert the sound-effect archive of one title.
pub fn samples(game: Title, data_dir: PathBuf, passes: u32, encoder: PathBuf) -> Result<()> {
    let config = build_config(data_dir, passes, encoder)?;
    SampleConverter::new(&config, game).run()?;
    Ok(())
}

/// Print the slot table of an archive.
pub fn list(archive: PathBuf) -> Result<()> {
    let data =
        fs::read(&archive).with_context(|| format!("reading {}", archive.display()))?;
    let hqr = Hqr::from_bytes(&data)?;
    println!("{}: {} slots", archive.display(), hqr.len());
    for (index, entry) in hqr.entries().iter().enumerate() {
        match entry {
            Entry::Blank => println!("{index:5}  blank"),
            Entry::Virtual { target, .. } => println!("{index:5}  virtual -> #{target}"),
            Entry::Payload(payload) => {
                let compression = payload.meta.compression.map_or("none", |kind| kind.name());
                println!(
                    "{index:5}  payload  {:>9} bytes  {} hidden  {compression}",
                    payload.content.len(),
                    payload.hidden.len()
                );
            }
        }
    }
    Ok(())
}
