//! Team identity shared by vision, world and referee data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shirt color assigned to a team by the referee.
///
/// Wire values are Yellow = 0, Blue = 1. Any other value decodes as
/// `Blue`, which is also the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TeamColor {
    Yellow,
    #[default]
    Blue,
}

impl TeamColor {
    pub fn opponent(self) -> Self {
        match self {
            Self::Yellow => Self::Blue,
            Self::Blue => Self::Yellow,
        }
    }
}

impl From<i32> for TeamColor {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Yellow,
            1 => Self::Blue,
            other => {
                tracing::debug!("unknown team color {}, using Blue", other);
                Self::Blue
            }
        }
    }
}

impl From<TeamColor> for i32 {
    fn from(color: TeamColor) -> i32 {
        match color {
            TeamColor::Yellow => 0,
            TeamColor::Blue => 1,
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yellow => f.write_str("Yellow"),
            Self::Blue => f.write_str("Blue"),
        }
    }
}

/// Which half of the field our goal is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    #[default]
    Left,
    Right,
}

impl TeamSide {
    /// Sign of the x axis pointing from our goal towards theirs.
    pub fn attack_sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps_colors() {
        assert_eq!(TeamColor::Yellow.opponent(), TeamColor::Blue);
        assert_eq!(TeamColor::Blue.opponent(), TeamColor::Yellow);
    }

    #[test]
    fn unknown_color_degrades_to_blue() {
        assert_eq!(TeamColor::from(0), TeamColor::Yellow);
        assert_eq!(TeamColor::from(1), TeamColor::Blue);
        assert_eq!(TeamColor::from(5), TeamColor::Blue);
        let decoded: TeamColor = serde_json::from_str("-3").unwrap();
        assert_eq!(decoded, TeamColor::Blue);
    }

    #[test]
    fn attack_sign_follows_side() {
        assert_eq!(TeamSide::Left.attack_sign(), 1.0);
        assert_eq!(TeamSide::Right.attack_sign(), -1.0);
    }
}
