// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-txmap: transcript coordinate mapping
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Converts positions and ranges between the three axes that describe a gene
//! transcript:
//!
//! | Axis | Prefix | Coordinates |
//! |------|--------|-------------|
//! | Genomic | g | 0-based, half-open, along the reference contig |
//! | Transcript/RNA | r | 0-based, half-open, along the spliced transcript |
//! | CDS | c | 0-based, half-open, relative to the first coding base |
//!
//! The alignment between a transcript and its reference is a run-length
//! edit-operation string (`M`/`X`/`I`/`D`/`N`), so mapping handles indels,
//! minus-strand transcripts, and intronic positions (reported as a
//! zero-width exon boundary with signed offsets into the intron).
//!
//! # Example
//!
//! ```
//! use ferro_txmap::{GenomeRange, MockProvider, TranscriptMapper};
//!
//! let provider = MockProvider::with_test_data();
//! let mapper = TranscriptMapper::new(&provider, "NM_012345.6", "NC_000001.11").unwrap();
//!
//! // The second exon starts at genomic 1200, which is transcript position 100
//! let r = mapper.g_to_r(GenomeRange::new(1200, 1210).unwrap()).unwrap();
//! assert_eq!((r.start_i(), r.end_i()), (100, 110));
//! ```

pub mod align;
pub mod convert;
pub mod data;
pub mod error;

// Re-export commonly used types
pub use align::{build_tx_ops, parse_align_ops, AlignOp, Interval, IntervalMapper, IntervalPair};
pub use convert::{CdsRange, GenomeRange, RnaRange, TranscriptMapper};
pub use data::{ExonRecord, MockProvider, Strand, TranscriptProvider, TxAlignment};
pub use error::TxMapError;

/// Result type alias for ferro-txmap operations
pub type Result<T> = std::result::Result<T, TxMapError>;
