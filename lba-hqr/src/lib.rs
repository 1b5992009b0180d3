// lba-hqr/src/lib.rs

//! Reader and writer for the HQR archive format used by the Little Big
//! Adventure games.
//!
//! An HQR file opens with a table of little-endian 32-bit offsets, one per
//! slot plus a final value holding the total file size. The slot count is
//! not stored; readers derive it from the first offset, which doubles as
//! the size of the table itself. A zero offset marks a blank slot, a
//! repeated offset marks a virtual slot aliasing the first slot with that
//! offset, and records packed between a record's end and the next table
//! offset are hidden entries owned by the preceding slot.
//!
//! Parsing decompresses LZSS records transparently. Serialization always
//! writes records uncompressed, so a parse-edit-write cycle normalizes
//! compression while leaving slot order, aliases and hidden records intact.

mod archive;
mod entry;
mod error;
mod lzss;
mod read;
mod write;

pub use archive::Hqr;
pub use entry::{CompressionKind, Entry, EntryMeta, HiddenEntry, PayloadEntry};
pub use error::{Error, Result};
