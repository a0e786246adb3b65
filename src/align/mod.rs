//! Alignment primitives
//!
//! Run-length alignment operations, the half-open interval blocks they
//! expand into, and the [`IntervalMapper`] that projects coordinates
//! between the two axes of one alignment.

pub mod cigar;
pub mod interval;
pub mod mapper;

pub use cigar::{build_tx_ops, ops_to_interval_pairs, ops_to_string, parse_align_ops, AlignOp};
pub use interval::{Interval, IntervalPair};
pub use mapper::IntervalMapper;
