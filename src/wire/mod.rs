//! Wire schemas and the versioned binary envelope.
//!
//! Inbound messages (`vision`, `gc`) are plain serde values produced by
//! the transport layer. Outbound, every snapshot type is wrapped in an
//! [`Envelope`] and encoded with bincode; the same bytes are used for
//! match recording and for redistribution to other processes.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
pub mod gc;
pub mod vision;

pub use error::WireError;

/// Version identifier for the envelope format
pub const WIRE_VERSION: u32 = 1;

/// Which snapshot an envelope carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadKind {
    RawWorld,
    World,
    Referee,
}

/// A value that can travel inside an [`Envelope`].
pub trait WirePayload: Serialize + DeserializeOwned {
    const KIND: PayloadKind;
}

/// Serializable wrapper around one snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Envelope format version
    pub version: u32,

    /// Payload discriminator, checked on decode
    pub kind: PayloadKind,

    /// Unique message identifier
    pub id: Uuid,

    /// When the envelope was created
    pub timestamp: DateTime<Utc>,

    pub payload: T,
}

#[derive(Deserialize)]
struct Header {
    version: u32,
    kind: PayloadKind,
}

/// Wrap `payload` in a fresh envelope and encode it.
pub fn encode<T: WirePayload>(payload: &T) -> Result<Vec<u8>, WireError> {
    let envelope = Envelope {
        version: WIRE_VERSION,
        kind: T::KIND,
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        payload,
    };
    bincode::serialize(&envelope).map_err(|e| WireError::SerializationFailed(e.to_string()))
}

/// Decode a full envelope, checking version and payload kind first.
pub fn decode_envelope<T: WirePayload>(bytes: &[u8]) -> Result<Envelope<T>, WireError> {
    let header: Header =
        bincode::deserialize(bytes).map_err(|e| WireError::DeserializationFailed(e.to_string()))?;

    if header.version != WIRE_VERSION {
        return Err(WireError::UnsupportedVersion {
            found: header.version,
            supported: WIRE_VERSION,
        });
    }
    if header.kind != T::KIND {
        return Err(WireError::KindMismatch {
            expected: T::KIND,
            found: header.kind,
        });
    }

    bincode::deserialize(bytes).map_err(|e| WireError::DeserializationFailed(e.to_string()))
}

/// Decode just the payload of an envelope.
pub fn decode<T: WirePayload>(bytes: &[u8]) -> Result<T, WireError> {
    decode_envelope(bytes).map(|envelope| envelope.payload)
}

/// Pretty JSON rendering for debug tooling.
pub fn to_json<T: WirePayload>(payload: &T) -> Result<String, WireError> {
    serde_json::to_string_pretty(payload).map_err(|e| WireError::SerializationFailed(e.to_string()))
}
