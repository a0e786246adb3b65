//! Transcript alignment data access
//!
//! Record types for transcript-to-reference alignments, the provider trait
//! that supplies them, and an in-memory mock used in tests and examples.

pub mod mock;
pub mod provider;
pub mod records;

pub use mock::MockProvider;
pub use provider::TranscriptProvider;
pub use records::{ExonRecord, Strand, TxAlignment};
