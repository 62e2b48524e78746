//! Per-camera capture records.

use crate::time::TimePoint;
use crate::wire::vision::DetectionFrame;
use serde::{Deserialize, Serialize};

/// Identity of one camera capture. Immutable once appended to a ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFrame {
    pub camera_id: u32,
    pub frame_number: u32,

    pub t_capture: TimePoint,
    pub t_sent: TimePoint,
    /// Capture time on the camera clock, used to align cameras.
    pub t_capture_camera: TimePoint,
}

impl From<&DetectionFrame> for RawFrame {
    fn from(frame: &DetectionFrame) -> Self {
        let t_capture = TimePoint::from_seconds(frame.t_capture);
        Self {
            camera_id: frame.camera_id,
            frame_number: frame.frame_number,
            t_capture,
            t_sent: TimePoint::from_seconds(frame.t_sent),
            t_capture_camera: frame
                .t_capture_camera
                .map_or(t_capture, TimePoint::from_seconds),
        }
    }
}
