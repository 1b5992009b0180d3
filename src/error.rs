// src/error.rs

//! Error types for the conversion pipeline

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] lba_hqr::Error),

    #[error("failed to launch encoder {}: {source}", .program.display())]
    EncoderLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("transcode failed for {}: {detail}", .path.display())]
    Transcode { path: PathBuf, detail: String },
}
