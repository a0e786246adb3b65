//! Run-length alignment operations
//!
//! The alignment between a transcript and its reference arrives as a compact
//! run-length string of `<length><opcode>` tokens, e.g. `"484M3D2275M"`:
//!
//! - `M` (match): consumes both axes.
//! - `X` (mismatch): consumes both axes.
//! - `I` (insertion): bases present only on the target axis.
//! - `D` (deletion): bases present only on the reference axis.
//! - `N` (skip): intron-sized reference gap, no target bases.
//!
//! This module parses that format, expands operations into aligned blocks,
//! and assembles per-exon operation lists into one transcript-wide list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::align::interval::{Interval, IntervalPair};
use crate::data::records::{ExonRecord, Strand};
use crate::error::TxMapError;
use crate::Result;

/// One run-length alignment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignOp {
    /// `M`: aligned match of `n` bases
    Match(i64),
    /// `X`: aligned mismatch of `n` bases
    Mismatch(i64),
    /// `I`: insertion of `n` bases into the target
    Insertion(i64),
    /// `D`: deletion of `n` reference bases
    Deletion(i64),
    /// `N`: skip over `n` reference bases (intron gap)
    Skip(i64),
}

impl AlignOp {
    /// Run length of the operation
    #[inline]
    pub const fn length(&self) -> i64 {
        match *self {
            AlignOp::Match(n)
            | AlignOp::Mismatch(n)
            | AlignOp::Insertion(n)
            | AlignOp::Deletion(n)
            | AlignOp::Skip(n) => n,
        }
    }

    /// Opcode letter used in the string format
    #[inline]
    pub const fn op_char(&self) -> char {
        match self {
            AlignOp::Match(_) => 'M',
            AlignOp::Mismatch(_) => 'X',
            AlignOp::Insertion(_) => 'I',
            AlignOp::Deletion(_) => 'D',
            AlignOp::Skip(_) => 'N',
        }
    }

    /// Reference-axis bases consumed
    #[inline]
    pub const fn ref_len(&self) -> i64 {
        match *self {
            AlignOp::Match(n) | AlignOp::Mismatch(n) | AlignOp::Deletion(n) | AlignOp::Skip(n) => n,
            AlignOp::Insertion(_) => 0,
        }
    }

    /// Target-axis bases consumed
    #[inline]
    pub const fn tgt_len(&self) -> i64 {
        match *self {
            AlignOp::Match(n) | AlignOp::Mismatch(n) | AlignOp::Insertion(n) => n,
            AlignOp::Deletion(_) | AlignOp::Skip(_) => 0,
        }
    }
}

impl fmt::Display for AlignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length(), self.op_char())
    }
}

/// Parse an alignment-operation string into a sequence of operations.
///
/// Tokens are `<positive integer><opcode>`, read left to right with no
/// separators. An empty string parses to an empty list.
///
/// # Examples
///
/// ```
/// use ferro_txmap::{parse_align_ops, AlignOp};
///
/// let ops = parse_align_ops("2M1I3M").unwrap();
/// assert_eq!(
///     ops,
///     vec![AlignOp::Match(2), AlignOp::Insertion(1), AlignOp::Match(3)]
/// );
/// ```
///
/// # Errors
///
/// Fails with [`TxMapError::Format`] on an unknown opcode, a missing or
/// non-positive length, or a trailing length with no opcode. The error
/// carries the byte offset of the offending token.
pub fn parse_align_ops(ops_str: &str) -> Result<Vec<AlignOp>> {
    let bytes = ops_str.as_bytes();
    let mut ops = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits_start {
            let found = ops_str[i..].chars().next().unwrap_or('?');
            return Err(TxMapError::format(
                i,
                format!("Expected an operation length, found '{found}'"),
            ));
        }
        if i == bytes.len() {
            return Err(TxMapError::format(
                digits_start,
                format!("Length '{}' has no opcode", &ops_str[digits_start..]),
            ));
        }
        let length: i64 = ops_str[digits_start..i].parse().map_err(|_| {
            TxMapError::format(
                digits_start,
                format!("Length '{}' is out of range", &ops_str[digits_start..i]),
            )
        })?;
        if length < 1 {
            return Err(TxMapError::format(
                digits_start,
                format!("Operation length must be positive, got {length}"),
            ));
        }
        let op = match bytes[i] {
            b'M' => AlignOp::Match(length),
            b'X' => AlignOp::Mismatch(length),
            b'I' => AlignOp::Insertion(length),
            b'D' => AlignOp::Deletion(length),
            b'N' => AlignOp::Skip(length),
            _ => {
                let found = ops_str[i..].chars().next().unwrap_or('?');
                return Err(TxMapError::format(i, format!("Unknown opcode '{found}'")));
            }
        };
        ops.push(op);
        i += 1;
    }
    Ok(ops)
}

/// Render operations back into the run-length string format.
pub fn ops_to_string(ops: &[AlignOp]) -> String {
    ops.iter().map(|op| op.to_string()).collect()
}

/// Expand operations into aligned blocks.
///
/// Both axes start at local coordinate 0 and advance per operation, so the
/// resulting blocks are contiguous on each axis.
pub fn ops_to_interval_pairs(ops: &[AlignOp]) -> Result<Vec<IntervalPair>> {
    let mut pairs = Vec::with_capacity(ops.len());
    let mut ref_pos = 0i64;
    let mut tgt_pos = 0i64;
    for op in ops {
        let ref_iv = Interval::new(ref_pos, ref_pos + op.ref_len())?;
        let tgt_iv = Interval::new(tgt_pos, tgt_pos + op.tgt_len())?;
        pairs.push(IntervalPair::new(ref_iv, tgt_iv)?);
        ref_pos = ref_iv.end_i();
        tgt_pos = tgt_iv.end_i();
    }
    Ok(pairs)
}

/// Assemble per-exon operation lists into one transcript-wide list.
///
/// Exon records are ordered by genomic position and each carries its
/// operations in genomic 5'→3' order. For a minus-strand transcript the
/// token order of every exon's operations is reversed, since transcript
/// traversal runs against the genomic direction; the exon order itself stays
/// genomic. Between consecutive exons a `Skip` operation is synthesized with
/// the length of the genomic gap (abutting exons add none).
///
/// # Errors
///
/// Fails with [`TxMapError::Configuration`] if the exon list is empty, if
/// exons overlap or are out of genomic order, or if an exon's operations do
/// not consume exactly its genomic span.
pub fn build_tx_ops(exons: &[ExonRecord], strand: Strand) -> Result<Vec<AlignOp>> {
    if exons.is_empty() {
        return Err(TxMapError::configuration("Exon list is empty"));
    }
    let mut tx_ops: Vec<AlignOp> = Vec::new();
    let mut prev_end: Option<i64> = None;
    for exon in exons {
        let mut ops = parse_align_ops(&exon.ops)?;
        let ref_span: i64 = ops.iter().map(|op| op.ref_len()).sum();
        if ref_span != exon.end_i - exon.start_i {
            return Err(TxMapError::configuration(format!(
                "Exon {}..{} spans {} bases but its operations consume {}",
                exon.start_i,
                exon.end_i,
                exon.end_i - exon.start_i,
                ref_span
            )));
        }
        if strand == Strand::Minus {
            ops.reverse();
        }
        if let Some(prev) = prev_end {
            let gap = exon.start_i - prev;
            if gap < 0 {
                return Err(TxMapError::configuration(format!(
                    "Exon starting at {} overlaps or precedes the previous exon ending at {prev}",
                    exon.start_i
                )));
            }
            if gap > 0 {
                tx_ops.push(AlignOp::Skip(gap));
            }
        }
        tx_ops.extend_from_slice(&ops);
        prev_end = Some(exon.end_i);
    }
    Ok(tx_ops)
}
