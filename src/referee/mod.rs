//! Referee protocol interpretation.
//!
//! Decodes the authority's commands and aggregate state, and answers
//! legality questions about the current state for a given team.

mod command;
mod display;
mod match_info;
pub mod rules;
mod state;
mod team_info;

pub use command::{Category, Command, Instruction, RESTART_MASK, SIDED_MASK};
pub use display::Relative;
pub use match_info::{MatchType, Stage};
pub use rules::{Legality, Rule};
pub use state::{GameState, Provenance, RefereeState};
pub use team_info::TeamInfo;
