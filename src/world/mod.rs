//! Canonical world snapshot.
//!
//! Pure data holder filled by the external fusion step. No visibility
//! transition logic lives here.

mod entity;
mod snapshot;

pub use entity::{BallState, RobotState, SeenState};
pub use snapshot::{Team, WorldState};
