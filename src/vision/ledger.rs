//! Append-only frame ledger.
//!
//! Observations refer to their producing frame by position in the
//! ledger. Positions are only ever minted by [`FrameLedger::append_frame`]
//! and frames are never removed, so a position stays valid however far
//! the ledger grows.

use super::frame::RawFrame;
use crate::time::Duration;
use serde::{Deserialize, Serialize};

/// Position of a frame inside its [`FrameLedger`].
///
/// # Example
///
/// ```rust
/// use matchstate::vision::{FrameLedger, RawFrame};
///
/// let mut ledger = FrameLedger::new();
/// let first = ledger.append_frame(RawFrame::default());
/// let second = ledger.append_frame(RawFrame::default());
///
/// assert_eq!(first.get(), 0);
/// assert_eq!(second.get(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameIdx(u32);

impl FrameIdx {
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Ordered, append-only sequence of capture records.
///
/// # Example
///
/// ```rust
/// use matchstate::time::TimePoint;
/// use matchstate::vision::{FrameLedger, RawFrame};
///
/// let mut ledger = FrameLedger::new();
///
/// let idx = ledger.append_frame(RawFrame {
///     camera_id: 3,
///     frame_number: 100,
///     t_capture: TimePoint::from_micros(1_000),
///     ..Default::default()
/// });
///
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.get(idx).map(|f| f.camera_id), Some(3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameLedger {
    frames: Vec<RawFrame>,
}

impl FrameLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Append a frame, returning the position just assigned.
    ///
    /// Never fails; the ledger is bounded only by memory. Existing
    /// positions are unaffected.
    pub fn append_frame(&mut self, frame: RawFrame) -> FrameIdx {
        let idx = FrameIdx(self.frames.len() as u32);
        self.frames.push(frame);
        idx
    }

    pub fn get(&self, idx: FrameIdx) -> Option<&RawFrame> {
        self.frames.get(idx.get())
    }

    pub(crate) fn contains(&self, idx: FrameIdx) -> bool {
        idx.get() < self.frames.len()
    }

    /// Look up a position known to come from this ledger.
    pub(crate) fn resolve(&self, idx: FrameIdx) -> &RawFrame {
        &self.frames[idx.get()]
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last(&self) -> Option<&RawFrame> {
        self.frames.last()
    }

    /// All frames, in arrival order.
    pub fn frames(&self) -> &[RawFrame] {
        &self.frames
    }

    /// Frames paired with their positions, in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameIdx, &RawFrame)> + '_ {
        self.frames
            .iter()
            .enumerate()
            .map(|(i, frame)| (FrameIdx(i as u32), frame))
    }

    /// Capture-time distance between the earliest and latest frame.
    ///
    /// Returns `None` for an empty ledger. Frames from different cameras
    /// may arrive out of capture order, so this scans every frame.
    ///
    /// # Example
    ///
    /// ```rust
    /// use matchstate::time::{Duration, TimePoint};
    /// use matchstate::vision::{FrameLedger, RawFrame};
    ///
    /// let mut ledger = FrameLedger::new();
    /// assert!(ledger.span().is_none());
    ///
    /// for t in [5_000, 1_000, 3_000] {
    ///     ledger.append_frame(RawFrame {
    ///         t_capture: TimePoint::from_micros(t),
    ///         ..Default::default()
    ///     });
    /// }
    ///
    /// assert_eq!(ledger.span(), Some(Duration::from_micros(4_000)));
    /// ```
    pub fn span(&self) -> Option<Duration> {
        let earliest = self.frames.iter().map(|f| f.t_capture).min()?;
        let latest = self.frames.iter().map(|f| f.t_capture).max()?;
        Some(latest - earliest)
    }
}
