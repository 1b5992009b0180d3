// lba-hqr/src/archive.rs

//! The in-memory archive container.

use crate::entry::Entry;
use crate::error::Result;
use crate::{read, write};

/// An HQR archive held fully in memory as an ordered slot list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hqr {
    entries: Vec<Entry>,
}

impl Hqr {
    pub fn new() -> Self {
        Hqr::default()
    }

    /// Parse an archive image. Compressed records are decompressed during
    /// the walk, so entry content is always plain bytes afterwards.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        read::parse(data)
    }

    /// Serialize the archive. Every record is written uncompressed and the
    /// offset table is rebuilt from the current slot order.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        write::serialize(self)
    }

    pub(crate) fn from_entries(entries: Vec<Entry>) -> Self {
        Hqr { entries }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }
}
