//! Error types for ferro-txmap
//!
//! One enum covers the crate: interval validation, alignment-string parsing,
//! transcript configuration, and provider lookups. Variants carry the
//! offending values so callers can report failures precisely.

use thiserror::Error;

/// Main error type for ferro-txmap operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxMapError {
    /// Malformed or out-of-range coordinate interval
    #[error("Invalid interval: {msg}")]
    InvalidInterval { msg: String },

    /// Malformed alignment-operation string
    #[error("Malformed alignment string at offset {pos}: {msg}")]
    Format { pos: usize, msg: String },

    /// Exon or CDS metadata unusable for building a mapper
    #[error("Invalid transcript configuration: {msg}")]
    Configuration { msg: String },

    /// No alignment record for the requested transcript/reference pair
    #[error("No alignment found for transcript {tx_ac} on {ref_ac}")]
    InvalidTranscript { tx_ac: String, ref_ac: String },

    /// Strand value other than +1/-1
    #[error("Unsupported strand {strand}; expected +1 or -1")]
    UnsupportedStrand { strand: i8 },

    /// CDS conversion requested on a transcript without CDS bounds
    #[error("Transcript {tx_ac} is non-coding; no CDS axis is defined")]
    NonCoding { tx_ac: String },

    /// Record deserialization error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl TxMapError {
    /// Create an invalid-interval error
    pub fn invalid_interval(msg: impl Into<String>) -> Self {
        TxMapError::InvalidInterval { msg: msg.into() }
    }

    /// Create a format error at a byte offset in the input string
    pub fn format(pos: usize, msg: impl Into<String>) -> Self {
        TxMapError::Format {
            pos,
            msg: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        TxMapError::Configuration { msg: msg.into() }
    }
}

impl From<serde_json::Error> for TxMapError {
    fn from(err: serde_json::Error) -> Self {
        TxMapError::Json {
            msg: err.to_string(),
        }
    }
}
