//! Axis-tagged coordinate ranges
//!
//! Each transcript axis gets its own range type, so a genomic range cannot
//! be passed where an RNA range is expected:
//!
//! - [`GenomeRange`]: positions on the reference sequence
//! - [`RnaRange`]: positions on the spliced transcript, with intronic offsets
//! - [`CdsRange`]: positions relative to the CDS start, with intronic offsets
//!
//! All ranges are 0-based half-open. RNA and CDS endpoints carry an offset
//! into the neighboring intron; offset 0 means the position is exonic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TxMapError;
use crate::Result;

fn checked_range(start_i: i64, end_i: i64) -> Result<()> {
    if start_i > end_i {
        return Err(TxMapError::invalid_interval(format!(
            "start {start_i} is greater than end {end_i}"
        )));
    }
    Ok(())
}

fn fmt_offset_pos(f: &mut fmt::Formatter<'_>, pos: i64, offset: i64) -> fmt::Result {
    if offset == 0 {
        write!(f, "{pos}")
    } else {
        write!(f, "{pos}{offset:+}")
    }
}

/// A range on the reference (genomic) axis
///
/// # Examples
///
/// ```
/// use ferro_txmap::GenomeRange;
///
/// let range = GenomeRange::new(1200, 1210).unwrap();
/// assert_eq!(range.len(), 10);
/// assert_eq!(range.to_string(), "1200_1210");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenomeRange {
    start_i: i64,
    end_i: i64,
}

impl GenomeRange {
    /// Create a new genomic range; fails if `start_i > end_i`.
    pub fn new(start_i: i64, end_i: i64) -> Result<Self> {
        checked_range(start_i, end_i)?;
        Ok(Self { start_i, end_i })
    }

    /// Start position (inclusive)
    #[inline]
    pub const fn start_i(&self) -> i64 {
        self.start_i
    }

    /// End position (exclusive)
    #[inline]
    pub const fn end_i(&self) -> i64 {
        self.end_i
    }

    /// Width of the range
    #[inline]
    pub const fn len(&self) -> i64 {
        self.end_i - self.start_i
    }

    /// Check if the range is zero-width
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_i == self.end_i
    }
}

impl fmt::Display for GenomeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.start_i, self.end_i)
    }
}

/// A range on the spliced transcript (RNA) axis
///
/// Endpoints landing inside an intron keep their exonic anchor and record
/// the distance into the intron as an offset: positive counts forward from
/// the upstream exon end, negative counts backward from the downstream exon
/// start.
///
/// # Examples
///
/// ```
/// use ferro_txmap::RnaRange;
///
/// let exonic = RnaRange::new(100, 110).unwrap();
/// assert!(!exonic.has_offsets());
///
/// let intronic = RnaRange::with_offsets(100, 100, 3, 5).unwrap();
/// assert_eq!(intronic.to_string(), "100+3_100+5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RnaRange {
    start_i: i64,
    end_i: i64,
    start_offset: i64,
    end_offset: i64,
}

impl RnaRange {
    /// Create an exonic range with zero offsets; fails if `start_i > end_i`.
    pub fn new(start_i: i64, end_i: i64) -> Result<Self> {
        Self::with_offsets(start_i, end_i, 0, 0)
    }

    /// Create a range with explicit intronic offsets.
    ///
    /// Only the anchor positions are ordered; offsets are not compared,
    /// since a range spanning a whole intron legitimately pairs a positive
    /// start offset with a negative end offset.
    pub fn with_offsets(start_i: i64, end_i: i64, start_offset: i64, end_offset: i64) -> Result<Self> {
        checked_range(start_i, end_i)?;
        Ok(Self {
            start_i,
            end_i,
            start_offset,
            end_offset,
        })
    }

    /// Start anchor position (inclusive)
    #[inline]
    pub const fn start_i(&self) -> i64 {
        self.start_i
    }

    /// End anchor position (exclusive)
    #[inline]
    pub const fn end_i(&self) -> i64 {
        self.end_i
    }

    /// Intronic offset of the start position
    #[inline]
    pub const fn start_offset(&self) -> i64 {
        self.start_offset
    }

    /// Intronic offset of the end position
    #[inline]
    pub const fn end_offset(&self) -> i64 {
        self.end_offset
    }

    /// Width between the anchor positions
    #[inline]
    pub const fn len(&self) -> i64 {
        self.end_i - self.start_i
    }

    /// Check if the anchor range is zero-width
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_i == self.end_i
    }

    /// Check if either endpoint lies inside an intron
    #[inline]
    pub const fn has_offsets(&self) -> bool {
        self.start_offset != 0 || self.end_offset != 0
    }
}

impl fmt::Display for RnaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_offset_pos(f, self.start_i, self.start_offset)?;
        write!(f, "_")?;
        fmt_offset_pos(f, self.end_i, self.end_offset)
    }
}

/// A range on the CDS axis
///
/// Positions are relative to the CDS start in forward transcript
/// coordinates, so 5' UTR positions are negative. Intronic offsets follow
/// the same convention as [`RnaRange`].
///
/// # Examples
///
/// ```
/// use ferro_txmap::CdsRange;
///
/// let range = CdsRange::new(-10, 5).unwrap();
/// assert_eq!(range.to_string(), "-10_5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CdsRange {
    start_i: i64,
    end_i: i64,
    start_offset: i64,
    end_offset: i64,
}

impl CdsRange {
    /// Create an exonic range with zero offsets; fails if `start_i > end_i`.
    pub fn new(start_i: i64, end_i: i64) -> Result<Self> {
        Self::with_offsets(start_i, end_i, 0, 0)
    }

    /// Create a range with explicit intronic offsets.
    pub fn with_offsets(start_i: i64, end_i: i64, start_offset: i64, end_offset: i64) -> Result<Self> {
        checked_range(start_i, end_i)?;
        Ok(Self {
            start_i,
            end_i,
            start_offset,
            end_offset,
        })
    }

    /// Start anchor position (inclusive)
    #[inline]
    pub const fn start_i(&self) -> i64 {
        self.start_i
    }

    /// End anchor position (exclusive)
    #[inline]
    pub const fn end_i(&self) -> i64 {
        self.end_i
    }

    /// Intronic offset of the start position
    #[inline]
    pub const fn start_offset(&self) -> i64 {
        self.start_offset
    }

    /// Intronic offset of the end position
    #[inline]
    pub const fn end_offset(&self) -> i64 {
        self.end_offset
    }

    /// Width between the anchor positions
    #[inline]
    pub const fn len(&self) -> i64 {
        self.end_i - self.start_i
    }

    /// Check if the anchor range is zero-width
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_i == self.end_i
    }

    /// Check if either endpoint lies inside an intron
    #[inline]
    pub const fn has_offsets(&self) -> bool {
        self.start_offset != 0 || self.end_offset != 0
    }
}

impl fmt::Display for CdsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_offset_pos(f, self.start_i, self.start_offset)?;
        write!(f, "_")?;
        fmt_offset_pos(f, self.end_i, self.end_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_range_basics() {
        let range = GenomeRange::new(1000, 1100).unwrap();
        assert_eq!(range.start_i(), 1000);
        assert_eq!(range.end_i(), 1100);
        assert_eq!(range.len(), 100);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_genome_range_zero_width() {
        let range = GenomeRange::new(42, 42).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_inverted_ranges_fail() {
        assert!(GenomeRange::new(10, 5).is_err());
        assert!(RnaRange::new(10, 5).is_err());
        assert!(CdsRange::with_offsets(10, 5, 0, 0).is_err());
    }

    #[test]
    fn test_rna_range_offsets() {
        let range = RnaRange::with_offsets(100, 100, 3, 5).unwrap();
        assert!(range.has_offsets());
        assert_eq!(range.start_offset(), 3);
        assert_eq!(range.end_offset(), 5);
        assert!(range.is_empty());
    }

    #[test]
    fn test_offsets_are_not_ordered() {
        // Spanning a whole intron pairs a downstream-from-start offset with
        // an upstream-from-end offset
        let range = RnaRange::with_offsets(100, 100, 3, -2).unwrap();
        assert_eq!(range.start_offset(), 3);
        assert_eq!(range.end_offset(), -2);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(GenomeRange::new(1200, 1210).unwrap().to_string(), "1200_1210");
        assert_eq!(RnaRange::new(100, 110).unwrap().to_string(), "100_110");
        assert_eq!(
            RnaRange::with_offsets(100, 100, 3, 5).unwrap().to_string(),
            "100+3_100+5"
        );
        assert_eq!(
            RnaRange::with_offsets(100, 100, -5, -2).unwrap().to_string(),
            "100-5_100-2"
        );
        assert_eq!(
            CdsRange::with_offsets(50, 50, 3, -2).unwrap().to_string(),
            "50+3_50-2"
        );
        assert_eq!(CdsRange::new(-10, 5).unwrap().to_string(), "-10_5");
    }

    #[test]
    fn test_serde_round_trip() {
        let range = CdsRange::with_offsets(0, 16, 0, -1).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        let back: CdsRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
