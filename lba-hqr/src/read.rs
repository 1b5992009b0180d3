// lba-hqr/src/read.rs

//! Offset-table driven archive parsing.

use std::collections::HashMap;

use tracing::debug;

use crate::archive::Hqr;
use crate::entry::{CompressionKind, Entry, EntryMeta, HiddenEntry, PayloadEntry};
use crate::error::{Error, Result};
use crate::lzss;

/// Bytes in a record header: original size, stored size, compression kind.
pub(crate) const RECORD_HEADER_LEN: usize = 10;

pub(crate) fn parse(data: &[u8]) -> Result<Hqr> {
    let first = read_u32(data, 0)?;
    if first == 0 {
        return Err(Error::LeadingBlankSlot);
    }
    if first < 4 || first % 4 != 0 {
        return Err(Error::BadOffsetTable(first));
    }

    // The table has no explicit length. The first record starts right after
    // it, so the first offset doubles as the table size in bytes: one u32
    // per slot plus the trailing total-file-size value.
    let table_len = first as usize / 4;
    let count = table_len - 1;
    let mut table = Vec::with_capacity(table_len);
    for index in 0..table_len {
        table.push(read_u32(data, index * 4)?);
    }
    let table_size = table_len * 4;
    let end_of_records = table[count] as usize;
    debug!("Parsing offset table: {count} slots, {} bytes", data.len());

    // Record boundaries: every distinct used offset plus the terminator.
    // Hidden records sit in the gap between a record's end and the next
    // boundary after its owner's offset.
    let mut bounds: Vec<u32> = table[..count].iter().copied().filter(|&o| o != 0).collect();
    bounds.push(table[count]);
    bounds.sort_unstable();
    bounds.dedup();

    let mut entries = Vec::with_capacity(count);
    let mut first_slot_by_offset: HashMap<u32, usize> = HashMap::new();

    for (slot, &offset) in table[..count].iter().enumerate() {
        if offset == 0 {
            entries.push(Entry::Blank);
            continue;
        }
        if let Some(&target) = first_slot_by_offset.get(&offset) {
            entries.push(Entry::Virtual {
                target,
                meta: EntryMeta {
                    offset: Some(offset),
                    ..EntryMeta::default()
                },
            });
            continue;
        }
        first_slot_by_offset.insert(offset, slot);

        let at = offset as usize;
        if at < table_size || at >= end_of_records {
            return Err(Error::OffsetOutOfRange {
                slot,
                offset,
                len: data.len(),
            });
        }
        let next = bounds.partition_point(|&b| b <= offset);
        let boundary = bounds.get(next).map_or(end_of_records, |&b| b as usize);

        let (record, end) = parse_record(data, at)?;
        if end > boundary {
            return Err(Error::OverlappingRecord { slot });
        }
        let mut payload = PayloadEntry {
            content: record.content,
            hidden: Vec::new(),
            meta: record.meta,
        };

        let mut cursor = end;
        while boundary - cursor >= RECORD_HEADER_LEN {
            let (hidden, hidden_end) = parse_record(data, cursor)?;
            if hidden_end > boundary {
                return Err(Error::OverlappingRecord { slot });
            }
            payload.hidden.push(HiddenEntry {
                content: hidden.content,
                meta: hidden.meta,
            });
            cursor = hidden_end;
        }
        if cursor < boundary {
            debug!(
                "Slot {slot}: ignoring {} slack bytes before the next boundary",
                boundary - cursor
            );
        }
        entries.push(Entry::Payload(payload));
    }

    Ok(Hqr::from_entries(entries))
}

struct RawRecord {
    content: Vec<u8>,
    meta: EntryMeta,
}

/// Parse one record at `at`, returning it and the offset just past its
/// stored bytes.
fn parse_record(data: &[u8], at: usize) -> Result<(RawRecord, usize)> {
    let original_size = read_u32(data, at)?;
    let stored_size = read_u32(data, at + 4)?;
    let kind = CompressionKind::from_raw(read_u16(data, at + 8)?, at + 8)?;
    let start = at + RECORD_HEADER_LEN;
    let end = start + stored_size as usize;
    if end > data.len() {
        return Err(Error::Truncated {
            offset: start,
            expected: stored_size as usize,
            actual: data.len().saturating_sub(start),
        });
    }
    let content = lzss::decompress(&data[start..end], original_size as usize, kind)?;
    let meta = EntryMeta {
        offset: Some(at as u32),
        original_size: Some(original_size),
        stored_size: Some(stored_size),
        compression: Some(kind),
    };
    Ok((RawRecord { content, meta }, end))
}

fn read_u32(data: &[u8], at: usize) -> Result<u32> {
    match data.get(at..at + 4) {
        Some(bytes) => Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(Error::Truncated {
            offset: at,
            expected: 4,
            actual: data.len().saturating_sub(at),
        }),
    }
}

fn read_u16(data: &[u8], at: usize) -> Result<u16> {
    match data.get(at..at + 2) {
        Some(bytes) => Ok(u16::from_le_bytes([bytes[0], bytes[1]])),
        None => Err(Error::Truncated {
            offset: at,
            expected: 2,
            actual: data.len().saturating_sub(at),
        }),
    }
}
