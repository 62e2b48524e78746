//! Inbound vision detection schema.
//!
//! One message per camera capture, already decoded from the transport.
//! Optional fields may be absent; ingestion substitutes defaults.

use serde::{Deserialize, Serialize};

/// One camera's detection frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionFrame {
    pub camera_id: u32,
    pub frame_number: u32,

    /// Capture time on the vision host, in seconds.
    pub t_capture: f64,
    /// Send time on the vision host, in seconds.
    pub t_sent: f64,
    /// Capture time on the camera clock, in seconds.
    #[serde(default)]
    pub t_capture_camera: Option<f64>,

    #[serde(default)]
    pub balls: Vec<DetectionBall>,
    #[serde(default)]
    pub robots_yellow: Vec<DetectionRobot>,
    #[serde(default)]
    pub robots_blue: Vec<DetectionRobot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionBall {
    pub confidence: f32,
    #[serde(default)]
    pub area: Option<u32>,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: Option<f32>,
    pub pixel_x: f32,
    pub pixel_y: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionRobot {
    pub confidence: f32,
    #[serde(default)]
    pub robot_id: Option<u32>,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub orientation: Option<f32>,
    pub pixel_x: f32,
    pub pixel_y: f32,
    #[serde(default)]
    pub height: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_decode_as_absent() {
        let json = r#"{
            "camera_id": 2,
            "frame_number": 7,
            "t_capture": 1.25,
            "t_sent": 1.26,
            "balls": [{ "confidence": 0.8, "x": 10.0, "y": -5.0, "pixel_x": 3.0, "pixel_y": 4.0 }]
        }"#;

        let frame: DetectionFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.camera_id, 2);
        assert!(frame.t_capture_camera.is_none());
        assert_eq!(frame.balls.len(), 1);
        assert!(frame.balls[0].z.is_none());
        assert!(frame.robots_yellow.is_empty());
        assert!(frame.robots_blue.is_empty());
    }
}
