// src/convert/voice.rs

//! Per-file voice archive conversion.
//!
//! Each title keeps its speech in one archive per language and scene under
//! `Common/Vox`. Every archive is converted independently: temp files live
//! in a working directory derived from the language prefix of its file
//! name, and the rebuilt archive lands under `CommonClassic/Voices` with
//! the same file name.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use lba_hqr::Hqr;

use crate::convert::{self, ConvertConfig, PayloadJob};
use crate::error::Result;
use crate::title::Title;

/// Bitrate for encoded speech.
pub const VOICE_BITRATE_KBPS: u32 = 32;

/// Language prefixes the shipped games use for voice archives.
const LANGUAGE_DIRS: [&str; 3] = ["DE", "EN", "FR"];

pub struct VoiceConverter<'a> {
    config: &'a ConvertConfig,
    title: Title,
}

impl<'a> VoiceConverter<'a> {
    pub fn new(config: &'a ConvertConfig, title: Title) -> Self {
        VoiceConverter { config, title }
    }

    /// Convert every voice archive of the title. A missing `Vox` directory
    /// logs an error and skips the title; a conversion error aborts.
    pub fn run(&self) -> Result<()> {
        let vox_dir = self.config.vox_dir(self.title);
        let files = match list_voice_archives(&vox_dir) {
            Ok(files) => files,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                error!("File not found: {}", vox_dir.display());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        if files.is_empty() {
            info!("No voice archives in {}", vox_dir.display());
            return Ok(());
        }

        let out_dir = self.config.voices_out_dir(self.title);
        fs::create_dir_all(&out_dir)?;
        for path in &files {
            self.convert_archive(path, &out_dir)?;
        }
        Ok(())
    }

    fn convert_archive(&self, input: &Path, out_dir: &Path) -> Result<()> {
        let raw = match fs::read(input) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                error!("File not found: {}", input.display());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        let archive = Hqr::from_bytes(&raw)?;

        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let language: String = file_name.chars().take(2).collect();
        let work_dir = out_dir.join(format!("{language}_VOICE")).join(&base);
        fs::create_dir_all(&work_dir)?;

        info!("Converting {}: {} slots", input.display(), archive.len());
        let repair = self.title.header_repair();
        let rebuilt = convert::rebuild_archive(&archive, |index, payload| {
            let job = PayloadJob {
                dir: &work_dir,
                stem: format!("{base}_{index:03}"),
                raw_extension: "wav",
                bitrate_kbps: Some(VOICE_BITRATE_KBPS),
            };
            convert::transcode_payload(self.config, repair, payload, &job)
        })?;

        let out_path = out_dir.join(&file_name);
        fs::write(&out_path, rebuilt.to_bytes()?)?;
        info!("Wrote {}", out_path.display());
        Ok(())
    }

    /// Remove the per-language working directories left under the output
    /// directory. Runs after every archive of the title is done.
    pub fn cleanup_language_dirs(&self) -> Result<()> {
        let out_dir = self.config.voices_out_dir(self.title);
        for language in LANGUAGE_DIRS {
            let dir = out_dir.join(format!("{language}_VOICE"));
            if dir.is_dir() {
                fs::remove_dir_all(&dir)?;
                debug!("Removed working directory {}", dir.display());
            }
        }
        Ok(())
    }
}

/// Voice archives of a directory, sorted by path for a stable order.
fn list_voice_archives(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_vox = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("vox"));
        if is_vox && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
