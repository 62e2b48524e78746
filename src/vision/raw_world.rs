//! The raw detection buffer.

use super::frame::RawFrame;
use super::ledger::{FrameIdx, FrameLedger};
use super::observation::{Observed, RawBall, RawRobot, Sourced};
use crate::core::TeamColor;
use crate::time::TimePoint;
use crate::wire::vision::DetectionFrame;
use crate::wire::{PayloadKind, WirePayload};
use serde::{Deserialize, Serialize};

/// Every unfiltered observation received in one ingestion window.
///
/// Owns its frame ledger and three growable observation collections.
/// Nothing is deduplicated: simultaneous sightings of one robot from two
/// cameras, and false positives, are all kept.
///
/// # Example
///
/// ```rust
/// use matchstate::vision::RawWorldState;
/// use matchstate::wire::vision::{DetectionBall, DetectionFrame};
///
/// let mut raw = RawWorldState::default();
/// raw.ingest(&DetectionFrame {
///     camera_id: 3,
///     frame_number: 100,
///     balls: vec![DetectionBall { confidence: 0.9, ..Default::default() }],
///     ..Default::default()
/// });
///
/// let ball = raw.balls().next().unwrap();
/// assert_eq!(ball.source_frame().camera_id, 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawWorldRepr")]
pub struct RawWorldState {
    time: TimePoint,
    frames: FrameLedger,
    balls: Vec<RawBall>,
    yellow_robots: Vec<RawRobot>,
    blue_robots: Vec<RawRobot>,
}

impl RawWorldState {
    pub fn new(time: TimePoint) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    pub fn time(&self) -> TimePoint {
        self.time
    }

    pub fn set_time(&mut self, time: TimePoint) {
        self.time = time;
    }

    pub fn ledger(&self) -> &FrameLedger {
        &self.frames
    }

    /// Ingest one camera message.
    ///
    /// Appends exactly one frame, then the message's balls, yellow robots
    /// and blue robots in the order listed, each tagged with the new
    /// frame's position. Existing entries are never touched.
    pub fn ingest(&mut self, detection: &DetectionFrame) -> FrameIdx {
        let idx = self.frames.append_frame(RawFrame::from(detection));

        self.balls.extend(
            detection
                .balls
                .iter()
                .map(|ball| RawBall::from_detection(ball, idx)),
        );
        self.yellow_robots.extend(
            detection
                .robots_yellow
                .iter()
                .map(|robot| RawRobot::from_detection(robot, TeamColor::Yellow, idx)),
        );
        self.blue_robots.extend(
            detection
                .robots_blue
                .iter()
                .map(|robot| RawRobot::from_detection(robot, TeamColor::Blue, idx)),
        );

        tracing::trace!(
            camera = detection.camera_id,
            frame = detection.frame_number,
            balls = detection.balls.len(),
            yellow = detection.robots_yellow.len(),
            blue = detection.robots_blue.len(),
            "ingested detection frame"
        );

        idx
    }

    pub fn balls(&self) -> impl Iterator<Item = Observed<'_, RawBall>> + '_ {
        observe(&self.frames, &self.balls)
    }

    pub fn yellow_robots(&self) -> impl Iterator<Item = Observed<'_, RawRobot>> + '_ {
        observe(&self.frames, &self.yellow_robots)
    }

    pub fn blue_robots(&self) -> impl Iterator<Item = Observed<'_, RawRobot>> + '_ {
        observe(&self.frames, &self.blue_robots)
    }

    pub fn robots(&self, color: TeamColor) -> impl Iterator<Item = Observed<'_, RawRobot>> + '_ {
        let robots = match color {
            TeamColor::Yellow => &self.yellow_robots,
            TeamColor::Blue => &self.blue_robots,
        };
        observe(&self.frames, robots)
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn robot_count(&self, color: TeamColor) -> usize {
        match color {
            TeamColor::Yellow => self.yellow_robots.len(),
            TeamColor::Blue => self.blue_robots.len(),
        }
    }

    /// Balls seen by one camera.
    pub fn balls_from(&self, camera_id: u32) -> impl Iterator<Item = Observed<'_, RawBall>> + '_ {
        self.balls()
            .filter(move |ball| ball.source_frame().camera_id == camera_id)
    }

    /// A compacted copy holding only frames captured at or after `cutoff`
    /// and the observations they produced.
    ///
    /// Frame positions are renumbered in the copy; `self` is untouched.
    pub fn retain_since(&self, cutoff: TimePoint) -> RawWorldState {
        let mut frames = FrameLedger::new();
        let remap: Vec<Option<FrameIdx>> = self
            .frames
            .frames()
            .iter()
            .map(|frame| (frame.t_capture >= cutoff).then(|| frames.append_frame(*frame)))
            .collect();

        let dropped = self.frames.len() - frames.len();
        if dropped > 0 {
            tracing::debug!(dropped, kept = frames.len(), "retention dropped frames");
        }

        RawWorldState {
            time: self.time,
            balls: remap_all(&self.balls, &remap),
            yellow_robots: remap_all(&self.yellow_robots, &remap),
            blue_robots: remap_all(&self.blue_robots, &remap),
            frames,
        }
    }
}

impl WirePayload for RawWorldState {
    const KIND: PayloadKind = PayloadKind::RawWorld;
}

fn observe<'a, T: Sourced>(
    ledger: &'a FrameLedger,
    items: &'a [T],
) -> impl Iterator<Item = Observed<'a, T>> + 'a {
    items.iter().map(move |item| Observed::new(ledger, item))
}

fn remap_all<T: Sourced>(items: &[T], remap: &[Option<FrameIdx>]) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| {
            remap
                .get(item.frame_idx().get())
                .copied()
                .flatten()
                .map(|idx| item.with_frame(idx))
        })
        .collect()
}

/// Shape of a buffer on the wire, before frame positions are checked.
#[derive(Deserialize)]
struct RawWorldRepr {
    time: TimePoint,
    frames: FrameLedger,
    balls: Vec<RawBall>,
    yellow_robots: Vec<RawRobot>,
    blue_robots: Vec<RawRobot>,
}

impl From<RawWorldRepr> for RawWorldState {
    fn from(repr: RawWorldRepr) -> Self {
        let frames = repr.frames;
        let balls = keep_resolvable(repr.balls, &frames, "ball");
        let yellow_robots = keep_resolvable(repr.yellow_robots, &frames, "yellow robot");
        let blue_robots = keep_resolvable(repr.blue_robots, &frames, "blue robot");

        Self {
            time: repr.time,
            frames,
            balls,
            yellow_robots,
            blue_robots,
        }
    }
}

fn keep_resolvable<T: Sourced>(items: Vec<T>, frames: &FrameLedger, what: &str) -> Vec<T> {
    let total = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter(|item| frames.contains(item.frame_idx()))
        .collect();

    if kept.len() < total {
        tracing::warn!(
            dropped = total - kept.len(),
            frames = frames.len(),
            "dropping {} observations that reference missing frames",
            what
        );
    }
    kept
}
