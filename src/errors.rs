//! Errors
//!
//! Custom error types used throughout the `canopy` crate.
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while converting between nodes and persisted
/// records.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The record cannot produce a valid node, either because a leaf
    /// record carries no value or because one of its field regions did
    /// not decode.
    #[error("malformed record: {reason}")]
    MalformedRecord {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },
    /// Encode received a node variant it has no mapping for. Indicates
    /// a variant was added without updating the converter.
    #[error("unsupported node kind")]
    UnsupportedNodeKind,
    /// The condition or value codec failed while encoding a node.
    #[error("failed to encode {field} fields")]
    EncodeFailed {
        field: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ConvertError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ConvertError::MalformedRecord {
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn malformed_by(reason: impl Into<String>, source: BoxError) -> Self {
        ConvertError::MalformedRecord {
            reason: reason.into(),
            source: Some(source),
        }
    }
}
