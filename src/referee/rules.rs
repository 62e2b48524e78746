//! Legality predicates over the current referee state.
//!
//! These only evaluate the state they are given. Deciding when the game
//! state changes belongs to the caller.
//!
//! # Example
//!
//! ```rust
//! use matchstate::core::TeamColor;
//! use matchstate::referee::{rules, GameState, RefereeState};
//!
//! let mut state = RefereeState::default();
//! state.state = GameState::Kickoff;
//! state.color = TeamColor::Yellow;
//!
//! assert!(!rules::can_kick_ball(&state, TeamColor::Yellow));
//! state.ready = true;
//! assert!(rules::can_kick_ball(&state, TeamColor::Yellow));
//! assert!(!rules::can_kick_ball(&state, TeamColor::Blue));
//! ```

use super::state::{GameState, RefereeState};
use crate::core::TeamColor;
use serde::{Deserialize, Serialize};

/// Whether the state currently favors `our` team.
pub fn is_ours(state: &RefereeState, our: TeamColor) -> bool {
    state.color == our
}

/// Kickoff, penalty or free kick.
pub fn restart(state: &RefereeState) -> bool {
    state.state.is_restart()
}

pub fn can_move(state: &RefereeState) -> bool {
    state.state != GameState::Halt
}

pub fn allowed_near_ball(state: &RefereeState, our: TeamColor) -> bool {
    state.state == GameState::Running
        || ((restart(state) || state.state == GameState::BallPlacement) && is_ours(state, our))
}

/// Contact during a restart needs the ready half of the handshake.
pub fn can_kick_ball(state: &RefereeState, our: TeamColor) -> bool {
    state.state == GameState::Running || (restart(state) && is_ours(state, our) && state.ready)
}

pub fn should_slow_down(state: &RefereeState) -> bool {
    state.state == GameState::Stop
}

/// A named legality check, for callers that iterate over them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    CanMove,
    AllowedNearBall,
    CanKickBall,
    ShouldSlowDown,
}

impl Rule {
    pub const ALL: [Rule; 4] = [
        Self::CanMove,
        Self::AllowedNearBall,
        Self::CanKickBall,
        Self::ShouldSlowDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CanMove => "can_move",
            Self::AllowedNearBall => "allowed_near_ball",
            Self::CanKickBall => "can_kick_ball",
            Self::ShouldSlowDown => "should_slow_down",
        }
    }

    pub fn check(self, state: &RefereeState, our: TeamColor) -> bool {
        match self {
            Self::CanMove => can_move(state),
            Self::AllowedNearBall => allowed_near_ball(state, our),
            Self::CanKickBall => can_kick_ball(state, our),
            Self::ShouldSlowDown => should_slow_down(state),
        }
    }
}

/// Every rule evaluated once for one team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legality {
    pub can_move: bool,
    pub allowed_near_ball: bool,
    pub can_kick_ball: bool,
    pub should_slow_down: bool,
}

impl Legality {
    pub fn evaluate(state: &RefereeState, our: TeamColor) -> Self {
        Self {
            can_move: can_move(state),
            allowed_near_ball: allowed_near_ball(state, our),
            can_kick_ball: can_kick_ball(state, our),
            should_slow_down: should_slow_down(state),
        }
    }

    pub fn get(&self, rule: Rule) -> bool {
        match rule {
            Rule::CanMove => self.can_move,
            Rule::AllowedNearBall => self.allowed_near_ball,
            Rule::CanKickBall => self.can_kick_ball,
            Rule::ShouldSlowDown => self.should_slow_down,
        }
    }
}
