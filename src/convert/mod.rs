//! Coordinate conversion between transcript axes
//!
//! Typed ranges for the genomic, RNA, and CDS axes, and the
//! [`TranscriptMapper`] that converts between them.

pub mod ranges;
pub mod transcript;

pub use ranges::{CdsRange, GenomeRange, RnaRange};
pub use transcript::TranscriptMapper;
