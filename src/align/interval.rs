//! Half-open interval primitives for alignment blocks
//!
//! Coordinates here are axis-local: every alignment starts at 0 on both of
//! its axes. Callers shift into and out of genomic space at a higher layer.

use serde::{Deserialize, Serialize};

use crate::error::TxMapError;
use crate::Result;

/// A half-open coordinate range `[start_i, end_i)`.
///
/// The start is inclusive and the end is exclusive, so `len` is simply
/// `end_i - start_i` and adjacent ranges share a boundary value.
///
/// # Examples
///
/// ```
/// use ferro_txmap::Interval;
///
/// let iv = Interval::new(5, 8).unwrap();
/// assert_eq!(iv.len(), 3);
/// assert!(iv.contains(5));
/// assert!(!iv.contains(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start_i: i64,
    end_i: i64,
}

impl Interval {
    /// Create a new half-open interval.
    ///
    /// Fails with [`TxMapError::InvalidInterval`] if `start_i > end_i`.
    pub fn new(start_i: i64, end_i: i64) -> Result<Self> {
        if start_i > end_i {
            return Err(TxMapError::invalid_interval(format!(
                "start {start_i} is greater than end {end_i}"
            )));
        }
        Ok(Self { start_i, end_i })
    }

    /// Inclusive start coordinate
    #[inline]
    pub const fn start_i(&self) -> i64 {
        self.start_i
    }

    /// Exclusive end coordinate
    #[inline]
    pub const fn end_i(&self) -> i64 {
        self.end_i
    }

    /// Number of positions covered
    #[inline]
    pub const fn len(&self) -> i64 {
        self.end_i - self.start_i
    }

    /// True when the interval covers no positions
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_i == self.end_i
    }

    /// True when `pos` falls inside the interval
    #[inline]
    pub const fn contains(&self, pos: i64) -> bool {
        self.start_i <= pos && pos < self.end_i
    }
}

/// One aligned block: a reference-axis range paired with a target-axis range.
///
/// Within a block the two axes advance in lockstep, so either both sides have
/// the same length (match/mismatch) or exactly one side is zero-length (a
/// pure insertion or deletion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalPair {
    ref_iv: Interval,
    tgt_iv: Interval,
}

impl IntervalPair {
    /// Create a new aligned block.
    ///
    /// Fails with [`TxMapError::InvalidInterval`] unless the two sides have
    /// equal length or one side is zero-length.
    pub fn new(ref_iv: Interval, tgt_iv: Interval) -> Result<Self> {
        if ref_iv.len() != tgt_iv.len() && ref_iv.len() != 0 && tgt_iv.len() != 0 {
            return Err(TxMapError::invalid_interval(format!(
                "block sides differ in length ({} vs {}) and neither is empty",
                ref_iv.len(),
                tgt_iv.len()
            )));
        }
        Ok(Self { ref_iv, tgt_iv })
    }

    /// Reference-axis side of the block
    #[inline]
    pub const fn ref_iv(&self) -> Interval {
        self.ref_iv
    }

    /// Target-axis side of the block
    #[inline]
    pub const fn tgt_iv(&self) -> Interval {
        self.tgt_iv
    }
}
