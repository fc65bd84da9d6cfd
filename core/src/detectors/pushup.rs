use crate::detectors::landmark;
use crate::math::{GeometryHelper, StatsHelper};
use crate::pose_interface::frame::{LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST};
use crate::pose_interface::{ExerciseKind, Landmark};
use crate::prelude::{
    ExerciseDetector, PhaseReading, PhaseSignal, TrackerConfig, TrackerResult,
};

/// Elbow-angle detector: open (down) below `elbow_down_deg`, closed (up)
/// above `extended_deg`. Any valid reading arms the session.
pub struct PushupDetector {
    down_deg: f32,
    up_deg: f32,
}

impl PushupDetector {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            down_deg: config.elbow_down_deg,
            up_deg: config.extended_deg,
        }
    }
}

impl ExerciseDetector for PushupDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Pushups
    }

    fn waiting_hint(&self) -> &'static str {
        "shoulder, elbow and wrist in view"
    }

    fn evaluate(&self, landmarks: &[Landmark]) -> TrackerResult<PhaseReading> {
        let shoulder = landmark(landmarks, LEFT_SHOULDER, "left shoulder")?;
        let elbow = landmark(landmarks, LEFT_ELBOW, "left elbow")?;
        let wrist = landmark(landmarks, LEFT_WRIST, "left wrist")?;

        let angle = GeometryHelper::joint_angle_deg(shoulder, elbow, wrist);
        let signal = if angle < self.down_deg {
            PhaseSignal::Open
        } else if angle > self.up_deg {
            PhaseSignal::Closed
        } else {
            PhaseSignal::Ambiguous
        };

        Ok(PhaseReading {
            signal,
            ready: true,
            visibility: StatsHelper::mean_visibility(landmarks),
        })
    }
}
