//! Unfiltered per-detection observations.

use super::frame::RawFrame;
use super::ledger::{FrameIdx, FrameLedger};
use crate::core::TeamColor;
use crate::geom::{Angle, Vec2, Vec3};
use crate::wire::vision::{DetectionBall, DetectionRobot};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Something produced by a frame in a ledger.
pub trait Sourced {
    fn frame_idx(&self) -> FrameIdx;

    /// Copy of this observation attributed to another frame position.
    fn with_frame(&self, frame: FrameIdx) -> Self;
}

/// One camera's reading of a ball.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawBall {
    pub confidence: f32,
    /// Field position; `z` is the reported height, zero when absent.
    pub position: Vec3,
    pub pixel_position: Vec2,
    pub area: u32,
    frame_idx: FrameIdx,
}

impl RawBall {
    pub(crate) fn from_detection(ball: &DetectionBall, frame_idx: FrameIdx) -> Self {
        Self {
            confidence: ball.confidence,
            position: Vec3::new(ball.x, ball.y, ball.z.unwrap_or_default()),
            pixel_position: Vec2::new(ball.pixel_x, ball.pixel_y),
            area: ball.area.unwrap_or_default(),
            frame_idx,
        }
    }
}

impl Sourced for RawBall {
    fn frame_idx(&self) -> FrameIdx {
        self.frame_idx
    }

    fn with_frame(&self, frame_idx: FrameIdx) -> Self {
        Self {
            frame_idx,
            ..self.clone()
        }
    }
}

/// One camera's reading of a robot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRobot {
    pub confidence: f32,
    /// Identifier as reported by vision; not checked against the robot limit.
    pub id: u32,
    pub color: TeamColor,
    pub height: f32,
    pub position: Vec2,
    pub pixel_position: Vec2,
    pub angle: Angle,
    frame_idx: FrameIdx,
}

impl RawRobot {
    pub(crate) fn from_detection(
        robot: &DetectionRobot,
        color: TeamColor,
        frame_idx: FrameIdx,
    ) -> Self {
        Self {
            confidence: robot.confidence,
            id: robot.robot_id.unwrap_or_default(),
            color,
            height: robot.height.unwrap_or_default(),
            position: Vec2::new(robot.x, robot.y),
            pixel_position: Vec2::new(robot.pixel_x, robot.pixel_y),
            angle: Angle::from_rad(robot.orientation.unwrap_or_default()),
            frame_idx,
        }
    }
}

impl Sourced for RawRobot {
    fn frame_idx(&self) -> FrameIdx {
        self.frame_idx
    }

    fn with_frame(&self, frame_idx: FrameIdx) -> Self {
        Self {
            frame_idx,
            ..self.clone()
        }
    }
}

/// An observation borrowed together with the ledger that produced it.
///
/// Only a [`RawWorldState`](super::RawWorldState) hands these out, and it
/// never holds an observation whose frame is missing from its ledger, so
/// [`Observed::source_frame`] cannot fail. The borrow ties the lifetime
/// of the lookup to the owning buffer.
#[derive(Debug)]
pub struct Observed<'a, T> {
    ledger: &'a FrameLedger,
    item: &'a T,
}

impl<T> Clone for Observed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Observed<'_, T> {}

impl<'a, T: Sourced> Observed<'a, T> {
    pub(crate) fn new(ledger: &'a FrameLedger, item: &'a T) -> Self {
        Self { ledger, item }
    }

    /// The capture record this observation came from.
    pub fn source_frame(&self) -> &'a RawFrame {
        self.ledger.resolve(self.item.frame_idx())
    }

    pub fn item(&self) -> &'a T {
        self.item
    }
}

impl<T> Deref for Observed<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.item
    }
}
