// src/encode.rs

//! External encoder invocation.
//!
//! Every payload goes through the same pass protocol. A pass that finds its
//! destination already present re-encodes that file instead of the original
//! input: the destination is copied to `<dest>.bak`, deleted, and the backup
//! becomes the pass input. Running the protocol several times over the same
//! destination therefore applies the encoder's denoise filter repeatedly,
//! and an interrupted run picks up from whatever the last pass left behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Extension of encoded temp files.
pub const ENCODED_EXTENSION: &str = "ogg";

const AUDIO_CODEC: &str = "libvorbis";
const DENOISE_FILTER: &str = "afftdn=nt=w:tn=enabled";

/// Handle on the external encoder binary.
#[derive(Debug, Clone)]
pub struct Encoder {
    program: PathBuf,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new("ffmpeg")
    }
}

impl Encoder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Encoder {
            program: program.into(),
        }
    }

    /// Encode `input` into `output`, applying the pass protocol `passes`
    /// times, and return the final encoded bytes. The files at both paths
    /// are left in place for the caller to clean up.
    pub fn transcode(
        &self,
        input: &Path,
        output: &Path,
        bitrate_kbps: Option<u32>,
        passes: u32,
    ) -> Result<Vec<u8>> {
        for pass in 1..=passes {
            debug!(
                "Pass {pass}/{passes}: {} -> {}",
                input.display(),
                output.display()
            );
            self.run_pass(input, output, bitrate_kbps)?;
        }
        fs::read(output).map_err(|source| Error::Transcode {
            path: output.to_path_buf(),
            detail: format!("missing encoder output: {source}"),
        })
    }

    fn run_pass(&self, input: &Path, output: &Path, bitrate_kbps: Option<u32>) -> Result<()> {
        let source = if output.exists() {
            let backup = backup_path(output);
            fs::copy(output, &backup)?;
            PassSource::Backup(backup)
        } else {
            PassSource::Fresh(input.to_path_buf())
        };
        remove_if_exists(output)?;

        let mut command = Command::new(&self.program);
        command
            .arg("-i")
            .arg(source.path())
            .args(["-c:a", AUDIO_CODEC]);
        if let Some(kbps) = bitrate_kbps {
            command.arg("-b:a").arg(format!("{kbps}k"));
        }
        command
            .args(["-af", DENOISE_FILTER])
            .arg(output)
            .stdin(Stdio::null());

        let result = command.output().map_err(|source| Error::EncoderLaunch {
            program: self.program.clone(),
            source,
        })?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Transcode {
                path: output.to_path_buf(),
                detail: format!("encoder exited with {}: {}", result.status, stderr.trim()),
            });
        }

        if let PassSource::Backup(backup) = source {
            remove_if_exists(&backup)?;
        }
        Ok(())
    }
}

/// What a pass reads from: the caller's raw input, or the backup of the
/// previous pass's output.
enum PassSource {
    Fresh(PathBuf),
    Backup(PathBuf),
}

impl PassSource {
    fn path(&self) -> &Path {
        match self {
            PassSource::Fresh(path) => path,
            PassSource::Backup(path) => path,
        }
    }
}

fn backup_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
