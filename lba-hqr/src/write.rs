// lba-hqr/src/write.rs

//! Archive serialization.
//!
//! The layout is rebuilt from slot order alone. Offsets observed at parse
//! time are ignored and every record is written uncompressed. Blank slots
//! write offset zero, virtual slots write their target's offset, and the
//! final table value is the total file size.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::archive::Hqr;
use crate::entry::{CompressionKind, Entry};
use crate::error::{Error, Result};

pub(crate) fn serialize(hqr: &Hqr) -> Result<Vec<u8>> {
    let entries = hqr.entries();
    // Readers derive the slot count from slot 0's record offset, so a
    // non-empty archive must open with a payload slot.
    if let Some(first) = entries.first() {
        if !matches!(first, Entry::Payload(_)) {
            return Err(Error::LeadingSlotNotPayload);
        }
    }

    let table_size = (entries.len() + 1) * 4;
    let mut offsets = vec![0u32; entries.len()];
    let mut body: Vec<u8> = Vec::new();

    for (slot, entry) in entries.iter().enumerate() {
        if let Entry::Payload(payload) = entry {
            offsets[slot] = archive_offset(table_size, body.len())?;
            write_record(&mut body, &payload.content)?;
            for hidden in &payload.hidden {
                write_record(&mut body, &hidden.content)?;
            }
        }
    }
    let total = archive_offset(table_size, body.len())?;

    let mut out = Vec::with_capacity(table_size + body.len());
    for (slot, entry) in entries.iter().enumerate() {
        let offset = match entry {
            Entry::Blank => 0,
            Entry::Payload(_) => offsets[slot],
            Entry::Virtual { target, .. } => match entries.get(*target) {
                Some(Entry::Payload(_)) => offsets[*target],
                _ => {
                    return Err(Error::BadAlias {
                        slot,
                        target: *target,
                    });
                }
            },
        };
        out.write_u32::<LittleEndian>(offset)?;
    }
    out.write_u32::<LittleEndian>(total)?;
    out.extend_from_slice(&body);
    Ok(out)
}

fn write_record(buf: &mut Vec<u8>, content: &[u8]) -> Result<()> {
    let size = u32::try_from(content.len()).map_err(|_| Error::OversizedEntry {
        size: content.len(),
    })?;
    buf.write_u32::<LittleEndian>(size)?;
    buf.write_u32::<LittleEndian>(size)?;
    buf.write_u16::<LittleEndian>(CompressionKind::None.as_raw())?;
    buf.extend_from_slice(content);
    Ok(())
}

fn archive_offset(table_size: usize, body_len: usize) -> Result<u32> {
    u32::try_from(table_size + body_len).map_err(|_| Error::ArchiveTooLarge {
        size: table_size + body_len,
    })
}
