// src/convert/mod.rs

//! Archive conversion pipelines.
//!
//! Both topologies share the same core: walk an archive slot by slot,
//! transcode every payload (hidden records included), and emit a new
//! archive with identical structure. Blank and virtual slots pass through
//! untouched so the indices the games use keep working. The topologies
//! differ only in where archives come from and where temp files go:
//! [`VoiceConverter`] handles a folder of per-language archives,
//! [`SampleConverter`] a single monolithic one.

pub mod config;
mod samples;
mod voice;

use std::fs;
use std::path::Path;

use tracing::debug;

use lba_hqr::{Entry, EntryMeta, HiddenEntry, Hqr, PayloadEntry};

pub use config::ConvertConfig;
pub use samples::SampleConverter;
pub use voice::VoiceConverter;

use crate::encode::ENCODED_EXTENSION;
use crate::error::Result;
use crate::repair::HeaderRepair;

/// Rebuild an archive by transcoding every payload slot through `transcode`.
/// The closure receives the slot index and the source payload and returns
/// the replacement. Slot order, blanks, aliases and alias metadata are
/// carried over unchanged.
pub fn rebuild_archive<F>(input: &Hqr, mut transcode: F) -> Result<Hqr>
where
    F: FnMut(usize, &PayloadEntry) -> Result<PayloadEntry>,
{
    let mut output = Hqr::new();
    for (index, entry) in input.entries().iter().enumerate() {
        match entry {
            Entry::Blank => {
                debug!("Skipping blank entry #{index}");
                output.push(Entry::Blank);
            }
            Entry::Virtual { target, meta } => {
                debug!("Copying virtual entry #{index} (alias of #{target})");
                output.push(Entry::Virtual {
                    target: *target,
                    meta: meta.clone(),
                });
            }
            Entry::Payload(payload) => {
                debug!("Processing entry #{index}");
                output.push(Entry::Payload(transcode(index, payload)?));
            }
        }
    }
    Ok(output)
}

/// Temp-file naming for one payload slot.
pub(crate) struct PayloadJob<'a> {
    /// Directory receiving the raw and encoded temp files.
    pub dir: &'a Path,
    /// Temp file stem for the slot's own record. Hidden records append a
    /// two-digit suffix.
    pub stem: String,
    /// Extension of the raw temp file handed to the encoder.
    pub raw_extension: &'static str,
    /// Bitrate flag passed to the encoder, if any.
    pub bitrate_kbps: Option<u32>,
}

/// Transcode one payload slot: the owning record first, then each hidden
/// record in order. The rebuilt entry carries fresh metadata.
pub(crate) fn transcode_payload(
    config: &ConvertConfig,
    repair: HeaderRepair,
    source: &PayloadEntry,
    job: &PayloadJob<'_>,
) -> Result<PayloadEntry> {
    let content = transcode_buffer(config, repair, &source.content, job, &job.stem)?;
    let mut result = PayloadEntry::new(content);
    for (index, hidden) in source.hidden.iter().enumerate() {
        let stem = format!("{}_{index:02}", job.stem);
        let content = transcode_buffer(config, repair, &hidden.content, job, &stem)?;
        result.hidden.push(HiddenEntry {
            content,
            meta: EntryMeta::default(),
        });
    }
    Ok(result)
}

/// Run one buffer through repair and the encoder, cleaning up the temp
/// files on success.
fn transcode_buffer(
    config: &ConvertConfig,
    repair: HeaderRepair,
    raw: &[u8],
    job: &PayloadJob<'_>,
    stem: &str,
) -> Result<Vec<u8>> {
    let mut bytes = raw.to_vec();
    repair.apply(&mut bytes);

    let raw_path = job.dir.join(format!("{stem}.{}", job.raw_extension));
    let encoded_path = job.dir.join(format!("{stem}.{ENCODED_EXTENSION}"));
    fs::write(&raw_path, &bytes)?;
    let encoded = config
        .encoder
        .transcode(&raw_path, &encoded_path, job.bitrate_kbps, config.passes)?;
    fs::remove_file(&raw_path)?;
    fs::remove_file(&encoded_path)?;
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;

    fn sample_archive() -> Hqr {
        let mut hqr = Hqr::new();
        hqr.push(Entry::Payload(PayloadEntry::new(b"one".to_vec())));
        hqr.push(Entry::Blank);
        hqr.push(Entry::Virtual {
            target: 0,
            meta: EntryMeta {
                offset: Some(99),
                ..EntryMeta::default()
            },
        });
        hqr.push(Entry::Payload(PayloadEntry::new(b"two".to_vec())));
        hqr
    }

    #[test]
    fn test_walk_visits_only_payload_slots_in_order() {
        let input = sample_archive();
        let mut seen = Vec::new();
        let output = rebuild_archive(&input, |index, payload| {
            seen.push((index, payload.content.clone()));
            Ok(PayloadEntry::new(format!("enc{index}").into_bytes()))
        })
        .unwrap();

        assert_eq!(seen, [(0, b"one".to_vec()), (3, b"two".to_vec())]);
        let Some(Entry::Payload(first)) = output.entry(0) else {
            panic!("slot 0 should be a payload");
        };
        assert_eq!(first.content, b"enc0");
        let Some(Entry::Payload(last)) = output.entry(3) else {
            panic!("slot 3 should be a payload");
        };
        assert_eq!(last.content, b"enc3");
    }

    #[test]
    fn test_walk_preserves_blank_and_virtual_slots() {
        let input = sample_archive();
        let output = rebuild_archive(&input, |_, p| Ok(p.clone())).unwrap();
        assert!(matches!(output.entry(1), Some(Entry::Blank)));
        let Some(Entry::Virtual { target, meta }) = output.entry(2) else {
            panic!("slot 2 should be virtual");
        };
        assert_eq!(*target, 0);
        assert_eq!(meta.offset, Some(99));
    }

    #[test]
    fn test_walk_rebuilds_blank_payload_alias_sequence() {
        let mut input = Hqr::new();
        input.push(Entry::Blank);
        input.push(Entry::Payload(PayloadEntry::new(b"X".to_vec())));
        input.push(Entry::Virtual {
            target: 1,
            meta: EntryMeta::default(),
        });

        let output = rebuild_archive(&input, |_, payload| {
            let mut encoded = b"encoded:".to_vec();
            encoded.extend_from_slice(&payload.content);
            Ok(PayloadEntry::new(encoded))
        })
        .unwrap();

        assert_eq!(output.len(), 3);
        assert!(matches!(output.entry(0), Some(Entry::Blank)));
        let Some(Entry::Payload(payload)) = output.entry(1) else {
            panic!("slot 1 should be a payload");
        };
        assert_eq!(payload.content, b"encoded:X");
        assert!(payload.hidden.is_empty());
        assert!(matches!(
            output.entry(2),
            Some(Entry::Virtual { target: 1, .. })
        ));
    }

    #[test]
    fn test_walk_propagates_transcode_errors() {
        let input = sample_archive();
        let result = rebuild_archive(&input, |index, _| {
            if index == 3 {
                Err(Error::Transcode {
                    path: PathBuf::from("broken.ogg"),
                    detail: "encoder exited with signal".into(),
                })
            } else {
                Ok(PayloadEntry::new(Vec::new()))
            }
        });
        assert!(matches!(result, Err(Error::Transcode { .. })));
    }
}
