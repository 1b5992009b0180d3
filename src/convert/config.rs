// src/convert/config.rs

//! Conversion settings shared by both pipeline topologies.

use std::env;
use std::path::PathBuf;

use crate::encode::Encoder;
use crate::title::Title;

/// Encoder passes applied to every payload unless overridden.
pub const DEFAULT_PASSES: u32 = 3;

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Root holding one directory per title.
    pub data_root: PathBuf,
    /// Encoder passes per payload. Passes after the first re-encode the
    /// previous pass's output.
    pub passes: u32,
    /// External encoder invoked for every pass.
    pub encoder: Encoder,
    /// Scratch directory for monolithic-mode temp files.
    pub scratch_dir: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            data_root: PathBuf::from("./data"),
            passes: DEFAULT_PASSES,
            encoder: Encoder::default(),
            scratch_dir: default_scratch_dir(),
        }
    }
}

impl ConvertConfig {
    pub fn title_dir(&self, title: Title) -> PathBuf {
        self.data_root.join(title.dir_name())
    }

    /// Directory scanned for voice archives.
    pub fn vox_dir(&self, title: Title) -> PathBuf {
        self.title_dir(title).join("Common").join("Vox")
    }

    /// Output directory for rebuilt voice archives.
    pub fn voices_out_dir(&self, title: Title) -> PathBuf {
        self.title_dir(title).join("CommonClassic").join("Voices")
    }

    /// The monolithic sound-effect archive.
    pub fn samples_path(&self, title: Title) -> PathBuf {
        self.title_dir(title).join("Common").join("SAMPLES.HQR")
    }

    /// Output path for the rebuilt sound-effect archive.
    pub fn samples_out_path(&self, title: Title) -> PathBuf {
        self.title_dir(title)
            .join("CommonClassic")
            .join("SAMPLES.HQR")
    }
}

/// Stable scratch location so an interrupted run and its successor agree on
/// temp file names.
pub fn default_scratch_dir() -> PathBuf {
    env::temp_dir().join("lba-classic-audio")
}
