//! Bidirectional coordinate mapping across one alignment
//!
//! An [`IntervalMapper`] holds the ordered blocks of a single alignment and
//! projects half-open coordinate ranges from either axis onto the other.
//! Projection clips into the located block, so a query falling inside a
//! pure insertion or deletion collapses to the block's boundary point on the
//! opposite axis instead of being undefined.
//!
//! Block selection follows two explicit rules (a plain nearest-boundary
//! binary search does not reproduce them):
//!
//! - The start block is the highest-indexed block whose start is at or
//!   before the query start. When block boundaries tie, the query resolves
//!   to the later, "entering" block.
//! - The end block is found searching forward from the start block: the
//!   lowest-indexed block whose end is at or after the query end.
//!
//! Zero-width queries (`start == end`) are supported: the same rules pick
//! the entering block and the boundary point projects through it. Inverted
//! queries fail.

use crate::align::cigar::{ops_to_interval_pairs, parse_align_ops, AlignOp};
use crate::align::interval::{Interval, IntervalPair};
use crate::error::TxMapError;
use crate::Result;

/// Immutable block list mapping between a reference and a target axis.
///
/// Built once from a complete, contiguous block list; both axes run from 0
/// to their total length. Queries never mutate the mapper, so shared
/// references can be used freely across threads.
#[derive(Debug, Clone)]
pub struct IntervalMapper {
    pairs: Vec<IntervalPair>,
    ref_ivs: Vec<Interval>,
    tgt_ivs: Vec<Interval>,
    ref_len: i64,
    tgt_len: i64,
}

impl IntervalMapper {
    /// Build a mapper from an ordered block list.
    ///
    /// Fails with [`TxMapError::InvalidInterval`] unless each axis is
    /// contiguous from coordinate 0 (every block starts where its
    /// predecessor ended).
    pub fn new(pairs: Vec<IntervalPair>) -> Result<Self> {
        let mut ref_pos = 0i64;
        let mut tgt_pos = 0i64;
        for (idx, pair) in pairs.iter().enumerate() {
            if pair.ref_iv().start_i() != ref_pos || pair.tgt_iv().start_i() != tgt_pos {
                return Err(TxMapError::invalid_interval(format!(
                    "block {idx} is not contiguous with its predecessor"
                )));
            }
            ref_pos = pair.ref_iv().end_i();
            tgt_pos = pair.tgt_iv().end_i();
        }
        let ref_ivs = pairs.iter().map(|p| p.ref_iv()).collect();
        let tgt_ivs = pairs.iter().map(|p| p.tgt_iv()).collect();
        Ok(Self {
            pairs,
            ref_ivs,
            tgt_ivs,
            ref_len: ref_pos,
            tgt_len: tgt_pos,
        })
    }

    /// Build a mapper from parsed alignment operations.
    pub fn from_ops(ops: &[AlignOp]) -> Result<Self> {
        Self::new(ops_to_interval_pairs(ops)?)
    }

    /// Build a mapper directly from an alignment-operation string.
    pub fn from_ops_str(ops_str: &str) -> Result<Self> {
        Self::from_ops(&parse_align_ops(ops_str)?)
    }

    /// The aligned blocks, in order
    pub fn blocks(&self) -> &[IntervalPair] {
        &self.pairs
    }

    /// Total reference-axis length
    #[inline]
    pub const fn ref_len(&self) -> i64 {
        self.ref_len
    }

    /// Total target-axis length
    #[inline]
    pub const fn tgt_len(&self) -> i64 {
        self.tgt_len
    }

    /// Map a reference-axis range onto the target axis.
    pub fn map_ref_to_tgt(&self, start_i: i64, end_i: i64) -> Result<(i64, i64)> {
        self.map_between(&self.ref_ivs, &self.tgt_ivs, start_i, end_i)
    }

    /// Map a target-axis range onto the reference axis.
    pub fn map_tgt_to_ref(&self, start_i: i64, end_i: i64) -> Result<(i64, i64)> {
        self.map_between(&self.tgt_ivs, &self.ref_ivs, start_i, end_i)
    }

    fn map_between(
        &self,
        src: &[Interval],
        dst: &[Interval],
        start_i: i64,
        end_i: i64,
    ) -> Result<(i64, i64)> {
        if start_i > end_i {
            return Err(TxMapError::invalid_interval(format!(
                "start {start_i} is greater than end {end_i}"
            )));
        }
        let (si, ei) = Self::locate(src, start_i, end_i)?;
        let to_start = Self::project(src[si], dst[si], start_i);
        let to_end = Self::project(src[ei], dst[ei], end_i);
        Ok((to_start, to_end))
    }

    /// Locate the start and end block indices for a source-axis range.
    fn locate(src: &[Interval], start_i: i64, end_i: i64) -> Result<(usize, usize)> {
        // Block starts ascend, so the partition point over `start <= query`
        // is one past the highest-indexed candidate. Zero-width blocks share
        // their start with the following block, which makes the last
        // candidate the entering block at a tied boundary.
        let upper = src.partition_point(|iv| iv.start_i() <= start_i);
        if upper == 0 {
            return Err(TxMapError::invalid_interval(format!(
                "start {start_i} lies before the mapped range"
            )));
        }
        let si = upper - 1;
        // Block ends also ascend; searching the tail from the start block
        // gives the lowest-indexed block whose end reaches the query end.
        let ei = si + src[si..].partition_point(|iv| iv.end_i() < end_i);
        if ei == src.len() {
            return Err(TxMapError::invalid_interval(format!(
                "end {end_i} lies beyond the mapped range"
            )));
        }
        Ok((si, ei))
    }

    /// Carry a position's offset within `src` over to `dst`, clipped into
    /// `dst`'s closed `[start, end]` span.
    fn project(src: Interval, dst: Interval, pos: i64) -> i64 {
        (dst.start_i() + (pos - src.start_i())).clamp(dst.start_i(), dst.end_i())
    }

    /// Reference span of the maximal zero-target-width block run containing
    /// a reference range.
    ///
    /// Returns `None` when the range touches any block with target bases,
    /// i.e. when it is not wholly inside a deletion/skip gap.
    pub(crate) fn ref_gap_containing(&self, start_i: i64, end_i: i64) -> Option<(i64, i64)> {
        let (si, ei) = Self::locate(&self.ref_ivs, start_i, end_i).ok()?;
        if self.tgt_ivs[si..=ei].iter().any(|iv| iv.len() > 0) {
            return None;
        }
        let mut lo = si;
        while lo > 0 && self.tgt_ivs[lo - 1].is_empty() {
            lo -= 1;
        }
        let mut hi = ei;
        while hi + 1 < self.tgt_ivs.len() && self.tgt_ivs[hi + 1].is_empty() {
            hi += 1;
        }
        Some((self.ref_ivs[lo].start_i(), self.ref_ivs[hi].end_i()))
    }

    /// Reference span of the zero-width block run sitting at a target-axis
    /// boundary point, or `None` when no such run exists there.
    pub(crate) fn gap_at_tgt_boundary(&self, pos: i64) -> Option<(i64, i64)> {
        let upper = self.tgt_ivs.partition_point(|iv| iv.start_i() <= pos);
        if upper == 0 {
            return None;
        }
        let is_gap_at =
            |i: usize| self.tgt_ivs[i].is_empty() && self.tgt_ivs[i].start_i() == pos;
        // The entering block sits at upper - 1; the gap run, if any, is
        // either that block itself or ends immediately before it.
        let mut hi = upper - 1;
        if !is_gap_at(hi) {
            if hi == 0 || !is_gap_at(hi - 1) {
                return None;
            }
            hi -= 1;
        }
        let mut lo = hi;
        while lo > 0 && is_gap_at(lo - 1) {
            lo -= 1;
        }
        Some((self.ref_ivs[lo].start_i(), self.ref_ivs[hi].end_i()))
    }
}
