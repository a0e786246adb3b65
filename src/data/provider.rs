//! Transcript data provider trait
//!
//! Defines the interface for fetching transcript alignment records.

use crate::data::records::TxAlignment;
use crate::Result;

/// Trait for providing transcript alignment data
///
/// Implementations might include:
/// - MockProvider for testing
/// - a cdot JSON snapshot loaded from disk
/// - a UTA-style database client
pub trait TranscriptProvider {
    /// Get the alignment of a transcript onto a reference sequence
    ///
    /// # Arguments
    ///
    /// * `tx_ac` - Transcript accession (e.g. `"NM_012345.6"`)
    /// * `ref_ac` - Reference sequence accession (e.g. `"NC_000001.11"`)
    fn tx_alignment(&self, tx_ac: &str, ref_ac: &str) -> Result<TxAlignment>;

    /// Check if an alignment exists for the transcript/reference pair
    fn has_alignment(&self, tx_ac: &str, ref_ac: &str) -> bool {
        self.tx_alignment(tx_ac, ref_ac).is_ok()
    }
}

/// Blanket implementation for boxed trait objects
impl TranscriptProvider for Box<dyn TranscriptProvider> {
    fn tx_alignment(&self, tx_ac: &str, ref_ac: &str) -> Result<TxAlignment> {
        (**self).tx_alignment(tx_ac, ref_ac)
    }

    fn has_alignment(&self, tx_ac: &str, ref_ac: &str) -> bool {
        (**self).has_alignment(tx_ac, ref_ac)
    }
}
