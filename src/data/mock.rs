//! Mock transcript provider for testing

use std::collections::HashMap;

use crate::data::provider::TranscriptProvider;
use crate::data::records::{ExonRecord, TxAlignment};
use crate::error::TxMapError;
use crate::Result;

/// Mock transcript provider backed by an in-memory map
///
/// Alignments are keyed by `(transcript accession, reference accession)`;
/// loading from JSON expects an array of alignment records.
#[derive(Debug, Clone)]
pub struct MockProvider {
    alignments: HashMap<(String, String), TxAlignment>,
}

impl MockProvider {
    /// Create an empty mock provider
    pub fn new() -> Self {
        Self {
            alignments: HashMap::new(),
        }
    }

    /// Load alignments from a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<TxAlignment> = serde_json::from_str(json)?;
        let mut provider = Self::new();
        for record in records {
            provider.insert(record);
        }
        Ok(provider)
    }

    /// Add an alignment to the provider
    pub fn insert(&mut self, alignment: TxAlignment) {
        self.alignments.insert(
            (alignment.tx_ac.clone(), alignment.ref_ac.clone()),
            alignment,
        );
    }

    /// Number of alignments held
    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    /// Check if provider is empty
    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    /// Create a provider with some test alignments
    pub fn with_test_data() -> Self {
        let mut provider = Self::new();

        // A typical coding transcript on the plus strand: three exons with
        // gapless alignments and a CDS starting mid-exon-1
        provider.insert(TxAlignment {
            tx_ac: "NM_012345.6".to_string(),
            ref_ac: "NC_000001.11".to_string(),
            strand: 1,
            cds_start_i: Some(50),
            cds_end_i: Some(300),
            exons: vec![
                ExonRecord::new(1000, 1100, "100M"),
                ExonRecord::new(1200, 1350, "150M"),
                ExonRecord::new(1500, 1600, "100M"),
            ],
        });

        // A small minus-strand transcript with a 5-base intron
        provider.insert(TxAlignment {
            tx_ac: "NM_999999.1".to_string(),
            ref_ac: "NC_000001.11".to_string(),
            strand: -1,
            cds_start_i: Some(2),
            cds_end_i: Some(18),
            exons: vec![
                ExonRecord::new(2000, 2010, "10M"),
                ExonRecord::new(2015, 2025, "10M"),
            ],
        });

        provider
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptProvider for MockProvider {
    fn tx_alignment(&self, tx_ac: &str, ref_ac: &str) -> Result<TxAlignment> {
        self.alignments
            .get(&(tx_ac.to_string(), ref_ac.to_string()))
            .cloned()
            .ok_or_else(|| TxMapError::InvalidTranscript {
                tx_ac: tx_ac.to_string(),
                ref_ac: ref_ac.to_string(),
            })
    }
}
