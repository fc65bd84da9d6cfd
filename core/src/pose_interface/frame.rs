use serde::{Deserialize, Serialize};

/// Landmark indices of the 33-point pose topology used by the upstream
/// pose-estimation model.
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LANDMARK_COUNT: usize = 33;

/// Single tracked body point in normalized image coordinates.
///
/// `y` grows downward, so a wrist above the shoulder has the smaller value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }
}

/// One pose-source callback payload.
///
/// `landmarks: None` is the "no body detected" sentinel; timestamps are
/// seconds supplied by the caller. The core never reads a clock itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseFrame {
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Landmark>>,
}

impl PoseFrame {
    pub fn detected(timestamp: f64, landmarks: Vec<Landmark>) -> Self {
        Self {
            timestamp,
            landmarks: Some(landmarks),
        }
    }

    pub fn absent(timestamp: f64) -> Self {
        Self {
            timestamp,
            landmarks: None,
        }
    }
}
