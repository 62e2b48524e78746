//! Non-fatal problems found while applying configuration tables.

use thiserror::Error;

/// A mistake in a configuration table.
///
/// Reported and logged, never fatal: the rest of the table still applies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigDiagnostic {
    #[error("robot entry #{position} has no id")]
    MissingId { position: usize },

    #[error("robot entry #{position} has id {id}, expected {position}")]
    OutOfOrder { position: usize, id: i32 },

    #[error("robot entry #{position} has id {id}, outside the robot table")]
    OutOfRange { position: usize, id: i32 },
}

impl ConfigDiagnostic {
    /// Position of the offending entry in its table.
    pub fn position(&self) -> usize {
        match self {
            Self::MissingId { position }
            | Self::OutOfOrder { position, .. }
            | Self::OutOfRange { position, .. } => *position,
        }
    }
}
