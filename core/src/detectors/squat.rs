use crate::detectors::landmark;
use crate::math::{GeometryHelper, StatsHelper};
use crate::pose_interface::frame::{
    LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
};
use crate::pose_interface::{ExerciseKind, Landmark};
use crate::prelude::{
    ExerciseDetector, PhaseReading, PhaseSignal, TrackerConfig, TrackerResult,
};

/// Knee-angle detector evaluated on both legs, taking the more flexed one.
/// Open (down) below `knee_down_deg`, closed (up) above `extended_deg`; the
/// first down frame arms the session.
pub struct SquatDetector {
    down_deg: f32,
    up_deg: f32,
}

impl SquatDetector {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            down_deg: config.knee_down_deg,
            up_deg: config.extended_deg,
        }
    }
}

impl ExerciseDetector for SquatDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Squats
    }

    fn waiting_hint(&self) -> &'static str {
        "the first squat"
    }

    fn evaluate(&self, landmarks: &[Landmark]) -> TrackerResult<PhaseReading> {
        let left_angle = GeometryHelper::joint_angle_deg(
            landmark(landmarks, LEFT_HIP, "left hip")?,
            landmark(landmarks, LEFT_KNEE, "left knee")?,
            landmark(landmarks, LEFT_ANKLE, "left ankle")?,
        );
        let right_angle = GeometryHelper::joint_angle_deg(
            landmark(landmarks, RIGHT_HIP, "right hip")?,
            landmark(landmarks, RIGHT_KNEE, "right knee")?,
            landmark(landmarks, RIGHT_ANKLE, "right ankle")?,
        );
        let squat_angle = left_angle.min(right_angle);

        let signal = if squat_angle < self.down_deg {
            PhaseSignal::Open
        } else if squat_angle > self.up_deg {
            PhaseSignal::Closed
        } else {
            PhaseSignal::Ambiguous
        };

        Ok(PhaseReading {
            signal,
            ready: signal == PhaseSignal::Open,
            visibility: StatsHelper::mean_visibility(landmarks),
        })
    }
}
