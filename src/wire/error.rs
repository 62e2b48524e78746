//! Wire codec error types.

use super::PayloadKind;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a wire envelope
#[derive(Debug, Error)]
pub enum WireError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Envelope version is not supported by this build
    #[error("Unsupported wire version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Envelope carries a different payload than the caller asked for
    #[error("Expected {expected:?} payload, found {found:?}")]
    KindMismatch {
        expected: PayloadKind,
        found: PayloadKind,
    },
}
