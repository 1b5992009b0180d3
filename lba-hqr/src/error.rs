// lba-hqr/src/error.rs

//! Error types for HQR parsing and serialization

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated archive: expected {expected} bytes at offset {offset}, got {actual}")]
    Truncated {
        offset: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid offset table: first offset {0:#x} is not a valid table size")]
    BadOffsetTable(u32),

    #[error("slot 0 is blank; the entry count cannot be derived from the offset table")]
    LeadingBlankSlot,

    #[error("slot 0 must own a payload record; readers derive the entry count from its offset")]
    LeadingSlotNotPayload,

    #[error("slot {slot} points at offset {offset:#x}, outside the record area (file size {len:#x})")]
    OffsetOutOfRange { slot: usize, offset: u32, len: usize },

    #[error("unknown compression kind {kind} in record header at offset {offset:#x}")]
    UnknownCompression { kind: u16, offset: usize },

    #[error("record owned by slot {slot} overruns the next entry boundary")]
    OverlappingRecord { slot: usize },

    #[error("LZSS stream ended early at input offset {offset}")]
    LzssTruncated { offset: usize },

    #[error("LZSS back-reference distance {distance} exceeds the {written} bytes written so far")]
    LzssBackReference { distance: usize, written: usize },

    #[error("virtual slot {slot} aliases slot {target}, which owns no payload")]
    BadAlias { slot: usize, target: usize },

    #[error("entry of {size} bytes does not fit a 32-bit record header")]
    OversizedEntry { size: usize },

    #[error("archive of {size} bytes does not fit a 32-bit offset table")]
    ArchiveTooLarge { size: usize },
}
