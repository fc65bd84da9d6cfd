use crate::detectors::landmark;
use crate::math::{GeometryHelper, StatsHelper};
use crate::pose_interface::frame::{
    LEFT_ANKLE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use crate::pose_interface::{ExerciseKind, Landmark};
use crate::prelude::{
    ExerciseDetector, PhaseReading, PhaseSignal, TrackerConfig, TrackerResult,
};

/// Symmetric two-limb detector: open = hands raised and feet apart, closed =
/// hands down and feet together. The ankle-gap band between `feet_apart_min`
/// and `feet_together_max` is hysteresis against chatter.
pub struct JumpingJacksDetector {
    hand_raise_margin: f32,
    feet_apart_min: f32,
    feet_together_max: f32,
}

impl JumpingJacksDetector {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            hand_raise_margin: config.hand_raise_margin,
            feet_apart_min: config.feet_apart_min,
            feet_together_max: config.feet_together_max,
        }
    }
}

impl ExerciseDetector for JumpingJacksDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::JumpingJacks
    }

    fn waiting_hint(&self) -> &'static str {
        "hands up + feet apart"
    }

    fn evaluate(&self, landmarks: &[Landmark]) -> TrackerResult<PhaseReading> {
        let left_wrist = landmark(landmarks, LEFT_WRIST, "left wrist")?;
        let right_wrist = landmark(landmarks, RIGHT_WRIST, "right wrist")?;
        let left_shoulder = landmark(landmarks, LEFT_SHOULDER, "left shoulder")?;
        let right_shoulder = landmark(landmarks, RIGHT_SHOULDER, "right shoulder")?;
        let left_ankle = landmark(landmarks, LEFT_ANKLE, "left ankle")?;
        let right_ankle = landmark(landmarks, RIGHT_ANKLE, "right ankle")?;

        let wrist_height = GeometryHelper::mean_height(left_wrist, right_wrist);
        let shoulder_height = GeometryHelper::mean_height(left_shoulder, right_shoulder);
        let hands_up = wrist_height < shoulder_height - self.hand_raise_margin;

        let ankle_gap = GeometryHelper::horizontal_gap(left_ankle, right_ankle);
        let feet_apart = ankle_gap > self.feet_apart_min;
        let feet_together = ankle_gap < self.feet_together_max;

        let signal = if hands_up && feet_apart {
            PhaseSignal::Open
        } else if !hands_up && feet_together {
            PhaseSignal::Closed
        } else {
            PhaseSignal::Ambiguous
        };

        Ok(PhaseReading {
            signal,
            ready: hands_up && feet_apart,
            visibility: StatsHelper::mean_visibility(landmarks),
        })
    }
}
