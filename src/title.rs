// src/title.rs

//! The supported game titles and their audio conventions.

use clap::ValueEnum;

use crate::repair::HeaderRepair;

/// A game title whose data directory the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Title {
    /// Little Big Adventure (Relentless)
    Lba1,
    /// Little Big Adventure 2 (Twinsen's Odyssey)
    Lba2,
}

impl Title {
    /// Conversion order for a full batch run.
    pub const ALL: [Title; 2] = [Title::Lba1, Title::Lba2];

    /// Directory under the data root holding this title's files.
    pub fn dir_name(self) -> &'static str {
        match self {
            Title::Lba1 => "Little Big Adventure",
            Title::Lba2 => "Little Big Adventure 2",
        }
    }

    /// Patch for the signature byte the shipped archives zero out.
    pub fn header_repair(self) -> HeaderRepair {
        match self {
            // LBA1 entries are Creative Voice files missing the leading 'C'
            Title::Lba1 => HeaderRepair::FirstByte(b'C'),
            // LBA2 entries are RIFF/WAVE files missing the leading 'R'
            Title::Lba2 => HeaderRepair::FirstByte(b'R'),
        }
    }

    /// Extension for raw sound-effect payloads handed to the encoder. The
    /// payload bytes are never sniffed; the title decides the container.
    pub fn sample_extension(self) -> &'static str {
        match self {
            Title::Lba1 => "voc",
            Title::Lba2 => "wav",
        }
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
