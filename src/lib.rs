// src/lib.rs

//! LBA Classic Audio
//!
//! Batch transcoder that rebuilds the HQR audio archives of the Little Big
//! Adventure games with Ogg Vorbis payloads, keeping every slot index,
//! alias and hidden record where the engines expect them.
//!
//! # Architecture
//!
//! - Archive-shape-first: slot order, aliases and hidden records survive
//!   every conversion untouched
//! - One shared walk: both pipeline topologies transcode payloads through
//!   the same entry-by-entry rebuild
//! - External encoder: audio goes through an ffmpeg-compatible binary, one
//!   invocation per pass, with a backup/redirect protocol between passes
//! - Title conventions: header repair bytes, directory layout and raw
//!   extensions all hang off the title

pub mod batch;
pub mod convert;
pub mod encode;
mod error;
pub mod repair;
pub mod title;

pub use convert::{ConvertConfig, SampleConverter, VoiceConverter, rebuild_archive};
pub use encode::Encoder;
pub use error::{Error, Result};
pub use repair::HeaderRepair;
pub use title::Title;
