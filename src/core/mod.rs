//! Core types shared by every subsystem.
//!
//! This module contains:
//! - The `Phase` trait for enumerated protocol states
//! - The `wire_enum!` macro that generates them
//! - Team identity (`TeamColor`, `TeamSide`) and the robot count limit
//!
//! All logic in this module is pure (no side effects).

mod macros;
mod state;
mod team;

pub use state::Phase;
pub use team::{TeamColor, TeamSide};

/// Maximum number of robots per team, as fixed by the competition rules.
pub const MAX_ROBOTS: usize = 16;
