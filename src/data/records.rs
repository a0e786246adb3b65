//! Transcript alignment records
//!
//! # Coordinate System
//!
//! All coordinates in this module are **0-based half-open**:
//!
//! | Field | Axis | Notes |
//! |-------|------|-------|
//! | `ExonRecord.start_i`, `ExonRecord.end_i` | genomic | `[start, end)` on the reference sequence |
//! | `TxAlignment.cds_start_i`, `TxAlignment.cds_end_i` | transcript | `[start, end)` in forward transcript coordinates |
//!
//! Records carry the strand as a raw integer (`+1` or `-1`), matching how
//! alignment feeds serialize it; it is validated into [`Strand`] when a
//! mapper is built.

use serde::{Deserialize, Serialize};

use crate::error::TxMapError;

/// Strand orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Strand {
    #[serde(rename = "+")]
    #[default]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Strand {
    /// The raw integer form used by alignment records
    #[inline]
    pub const fn as_i8(&self) -> i8 {
        match self {
            Strand::Plus => 1,
            Strand::Minus => -1,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
        }
    }
}

impl TryFrom<i8> for Strand {
    type Error = TxMapError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Strand::Plus),
            -1 => Ok(Strand::Minus),
            other => Err(TxMapError::UnsupportedStrand { strand: other }),
        }
    }
}

/// One exon of a transcript alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExonRecord {
    /// Genomic start (0-based, inclusive)
    pub start_i: i64,
    /// Genomic end (0-based, exclusive)
    pub end_i: i64,
    /// Run-length alignment operations for this exon, e.g. `"100M"`
    pub ops: String,
}

impl ExonRecord {
    /// Create a new exon record
    pub fn new(start_i: i64, end_i: i64, ops: impl Into<String>) -> Self {
        Self {
            start_i,
            end_i,
            ops: ops.into(),
        }
    }

    /// Genomic span of the exon
    #[inline]
    pub const fn ref_span(&self) -> i64 {
        self.end_i - self.start_i
    }
}

/// A transcript's alignment onto one reference sequence
///
/// Exons are listed in genomic order regardless of strand. The CDS bounds
/// are optional; non-coding transcripts carry neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxAlignment {
    /// Transcript accession (e.g. `"NM_012345.6"`)
    pub tx_ac: String,
    /// Reference sequence accession (e.g. `"NC_000001.11"`)
    pub ref_ac: String,
    /// Strand as a raw integer: `+1` or `-1`
    pub strand: i8,
    /// CDS start in forward transcript coordinates (0-based, inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cds_start_i: Option<i64>,
    /// CDS end in forward transcript coordinates (0-based, exclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cds_end_i: Option<i64>,
    /// Exons in genomic order
    pub exons: Vec<ExonRecord>,
}

impl TxAlignment {
    /// Whether the record carries a CDS annotation
    pub fn is_coding(&self) -> bool {
        self.cds_start_i.is_some() || self.cds_end_i.is_some()
    }
}
