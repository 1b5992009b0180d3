// lba-hqr/src/entry.rs

//! Logical entry model for HQR archives.
//!
//! An archive is an ordered sequence of slots. A slot either owns a payload
//! record (possibly followed by hidden records packed before the next slot's
//! offset), aliases an earlier slot's record, or is blank. Indices are the
//! identity the games address entries by, so the slot order is preserved
//! through every edit.

use crate::error::{Error, Result};

/// Compression kind stored in a record header.
///
/// Kinds 1 and 2 are the two LZSS variants the games ship; they differ only
/// in the minimum match length encoded by a copy token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionKind {
    #[default]
    None,
    Lzss1,
    Lzss2,
}

impl CompressionKind {
    pub(crate) fn from_raw(raw: u16, offset: usize) -> Result<Self> {
        match raw {
            0 => Ok(CompressionKind::None),
            1 => Ok(CompressionKind::Lzss1),
            2 => Ok(CompressionKind::Lzss2),
            kind => Err(Error::UnknownCompression { kind, offset }),
        }
    }

    pub fn as_raw(self) -> u16 {
        match self {
            CompressionKind::None => 0,
            CompressionKind::Lzss1 => 1,
            CompressionKind::Lzss2 => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionKind::None => "none",
            CompressionKind::Lzss1 => "lzss-1",
            CompressionKind::Lzss2 => "lzss-2",
        }
    }
}

impl std::fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Provenance recorded while parsing: where a record sat in the source file
/// and how it was stored there. Never serialized back; a rebuilt archive is
/// laid out from scratch. Empty on entries built in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMeta {
    /// Absolute offset of the record in the source file.
    pub offset: Option<u32>,
    /// Decompressed size declared by the record header.
    pub original_size: Option<u32>,
    /// Stored (possibly compressed) size declared by the record header.
    pub stored_size: Option<u32>,
    /// Compression kind the record was stored with.
    pub compression: Option<CompressionKind>,
}

/// A record appended after its owner's payload, invisible to the offset
/// table. The games locate these by walking record headers, so their order
/// under the owner is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenEntry {
    pub content: Vec<u8>,
    pub meta: EntryMeta,
}

/// A slot that owns a record, together with the hidden records packed
/// between it and the next table offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadEntry {
    pub content: Vec<u8>,
    pub hidden: Vec<HiddenEntry>,
    pub meta: EntryMeta,
}

impl PayloadEntry {
    pub fn new(content: Vec<u8>) -> Self {
        PayloadEntry {
            content,
            ..PayloadEntry::default()
        }
    }
}

/// One slot of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Present in the offset table with offset zero. Carries no data but
    /// still occupies an index.
    Blank,
    /// Shares its offset with an earlier slot and resolves to that slot's
    /// record. `target` is the first slot carrying the shared offset.
    Virtual { target: usize, meta: EntryMeta },
    /// Owns a record of its own.
    Payload(PayloadEntry),
}

impl Entry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entry::Blank => "blank",
            Entry::Virtual { .. } => "virtual",
            Entry::Payload(_) => "payload",
        }
    }
}
