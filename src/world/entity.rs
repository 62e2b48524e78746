//! Filtered ball and robot entities.

use crate::core::TeamColor;
use crate::geom::{Angle, Ray, Vec2};
use serde::{Deserialize, Serialize};

crate::wire_enum! {
    /// Visibility lifecycle of a tracked entity.
    ///
    /// The fusion step decides transitions; this crate only stores them.
    pub enum SeenState: i32 {
        /// Not seen for long enough that its position is meaningless.
        NotSeen = 0,
        /// Recently lost; the last position may still be extrapolated.
        TemporarilyOut = 1,
        Seen = 2,
    }
    fallback: NotSeen
}

impl SeenState {
    pub fn is_seen(self) -> bool {
        self == Self::Seen
    }

    /// Whether a last known position is still usable.
    pub fn is_trackable(self) -> bool {
        self != Self::NotSeen
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub seen_state: SeenState,
}

impl Default for BallState {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            seen_state: SeenState::NotSeen,
        }
    }
}

impl BallState {
    /// Line of motion: from the position along the velocity heading.
    ///
    /// A stationary ball yields a ray along the positive x axis.
    pub fn line(&self) -> Ray {
        Ray::new(self.position, Angle::of(&self.velocity))
    }
}

/// A filtered robot. Its identifier is fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotState {
    #[serde(rename = "id")]
    vision_id: u32,
    pub color: TeamColor,

    pub position: Vec2,
    pub velocity: Vec2,

    pub angle: Angle,
    /// Radians per second.
    pub angular_velocity: f32,

    pub seen_state: SeenState,
    /// Withdrawn from the field for substitution.
    pub out_for_substitute: bool,
}

impl RobotState {
    pub(crate) fn new(vision_id: u32, color: TeamColor) -> Self {
        Self {
            vision_id,
            color,
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            angle: Angle::default(),
            angular_velocity: 0.0,
            seen_state: SeenState::NotSeen,
            out_for_substitute: true,
        }
    }

    pub fn id(&self) -> u32 {
        self.vision_id
    }

    /// On the field and currently or recently seen.
    pub fn is_available(&self) -> bool {
        !self.out_for_substitute && self.seen_state.is_trackable()
    }
}
