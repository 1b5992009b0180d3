// lba-hqr/src/lzss.rs

//! LZSS decompression for record kinds 1 and 2.
//!
//! The stream is a sequence of flag bytes, each governing the next eight
//! items. A set bit means one literal byte. A clear bit means a 16-bit
//! little-endian copy token: the low nibble encodes the copy length as
//! `(token & 0x0f) + kind + 1`, the remaining twelve bits encode the back
//! distance as `(token >> 4) + 1`. Copies may overlap their own output and
//! are resolved byte by byte. Decoding stops once `expected_len` bytes have
//! been produced.

use crate::entry::CompressionKind;
use crate::error::{Error, Result};

pub(crate) fn decompress(
    src: &[u8],
    expected_len: usize,
    kind: CompressionKind,
) -> Result<Vec<u8>> {
    let mode = match kind {
        CompressionKind::None => return Ok(src.to_vec()),
        CompressionKind::Lzss1 => 1usize,
        CompressionKind::Lzss2 => 2usize,
    };

    let mut out = Vec::with_capacity(expected_len);
    let mut pos = 0usize;

    while out.len() < expected_len {
        let flags = next_byte(src, &mut pos)?;
        for bit in 0..8 {
            if out.len() >= expected_len {
                break;
            }
            if flags & (1 << bit) != 0 {
                out.push(next_byte(src, &mut pos)?);
            } else {
                let lo = next_byte(src, &mut pos)? as u16;
                let hi = next_byte(src, &mut pos)? as u16;
                let token = hi << 8 | lo;
                let length = (token & 0x0f) as usize + mode + 1;
                let distance = (token >> 4) as usize + 1;
                if distance > out.len() {
                    return Err(Error::LzssBackReference {
                        distance,
                        written: out.len(),
                    });
                }
                for _ in 0..length {
                    if out.len() >= expected_len {
                        break;
                    }
                    out.push(out[out.len() - distance]);
                }
            }
        }
    }

    Ok(out)
}

fn next_byte(src: &[u8], pos: &mut usize) -> Result<u8> {
    let byte = *src
        .get(*pos)
        .ok_or(Error::LzssTruncated { offset: *pos })?;
    *pos += 1;
    Ok(byte)
}
