// src/convert/samples.rs

//! Monolithic sound-effect archive conversion.
//!
//! Each title ships a single `SAMPLES.HQR` holding every sound effect.
//! Temp files go to the process-wide scratch directory under fixed
//! `sample_NNN` names, so a re-run after an interruption reuses the same
//! paths. The title alone decides the raw extension handed to the encoder;
//! payload bytes are never sniffed.

use std::fs;
use std::io;

use tracing::{error, info};

use lba_hqr::Hqr;

use crate::convert::{self, ConvertConfig, PayloadJob};
use crate::error::Result;
use crate::title::Title;

pub struct SampleConverter<'a> {
    config: &'a ConvertConfig,
    title: Title,
}

impl<'a> SampleConverter<'a> {
    pub fn new(config: &'a ConvertConfig, title: Title) -> Self {
        SampleConverter { config, title }
    }

    /// Convert the title's sound-effect archive. A missing archive logs an
    /// error and skips the title; a conversion error aborts.
    pub fn run(&self) -> Result<()> {
        let input = self.config.samples_path(self.title);
        let raw = match fs::read(&input) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                error!("File not found: {}", input.display());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        let archive = Hqr::from_bytes(&raw)?;

        fs::create_dir_all(&self.config.scratch_dir)?;
        info!("Converting {}: {} slots", input.display(), archive.len());
        let repair = self.title.header_repair();
        let extension = self.title.sample_extension();
        let rebuilt = convert::rebuild_archive(&archive, |index, payload| {
            let job = PayloadJob {
                dir: &self.config.scratch_dir,
                stem: format!("sample_{index:03}"),
                raw_extension: extension,
                bitrate_kbps: None,
            };
            convert::transcode_payload(self.config, repair, payload, &job)
        })?;

        let out_path = self.config.samples_out_path(self.title);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, rebuilt.to_bytes()?)?;
        info!("Wrote {}", out_path.display());
        Ok(())
    }
}
