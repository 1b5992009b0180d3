// src/batch.rs

//! Sequential batch conversion across the known titles.

use tracing::info;

use crate::convert::{ConvertConfig, SampleConverter, VoiceConverter};
use crate::error::Result;
use crate::title::Title;

/// Convert every known title: sound effects first, then voices, then the
/// per-language cleanup. Titles run strictly one after another; they share
/// the encoder and the scratch directory, so the runs must not interleave.
pub fn run(config: &ConvertConfig) -> Result<()> {
    for title in Title::ALL {
        info!("Converting {title}: sound effects");
        SampleConverter::new(config, title).run()?;

        info!("Converting {title}: voices");
        let voices = VoiceConverter::new(config, title);
        voices.run()?;
        voices.cleanup_language_dirs()?;
    }
    Ok(())
}
