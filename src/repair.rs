// src/repair.rs

//! Byte patches for payloads the games store with a damaged header.

/// Patch applied to every payload before it reaches the encoder.
///
/// The shipped archives blank the first signature byte of each audio file.
/// Restoring it is enough for standard tools to recognize the container;
/// every other byte is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRepair {
    /// Leave the payload as is.
    None,
    /// Overwrite byte 0 with the given value.
    FirstByte(u8),
}

impl HeaderRepair {
    pub fn apply(self, bytes: &mut [u8]) {
        if let HeaderRepair::FirstByte(value) = self {
            if let Some(first) = bytes.first_mut() {
                *first = value;
            }
        }
    }
}
