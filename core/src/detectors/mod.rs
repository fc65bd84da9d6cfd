pub mod jumping_jacks;
pub mod pushup;
pub mod squat;

pub use jumping_jacks::JumpingJacksDetector;
pub use pushup::PushupDetector;
pub use squat::SquatDetector;

use crate::pose_interface::{ExerciseKind, Landmark};
use crate::prelude::{ExerciseDetector, TrackerConfig, TrackerError, TrackerResult};

/// Builds the detector for an exercise, if one exists.
pub fn detector_for(
    kind: ExerciseKind,
    config: &TrackerConfig,
) -> TrackerResult<Box<dyn ExerciseDetector>> {
    match kind {
        ExerciseKind::JumpingJacks => Ok(Box::new(JumpingJacksDetector::new(config))),
        ExerciseKind::Pushups => Ok(Box::new(PushupDetector::new(config))),
        ExerciseKind::Squats => Ok(Box::new(SquatDetector::new(config))),
        other => Err(TrackerError::UnsupportedExercise(other)),
    }
}

pub(crate) fn landmark<'a>(
    landmarks: &'a [Landmark],
    index: usize,
    name: &str,
) -> TrackerResult<&'a Landmark> {
    landmarks
        .get(index)
        .ok_or_else(|| TrackerError::MissingLandmark(format!("{name} (index {index})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_rejects_exercises_without_detectors() {
        let config = TrackerConfig::default();
        assert!(detector_for(ExerciseKind::JumpingJacks, &config).is_ok());
        assert!(matches!(
            detector_for(ExerciseKind::HighKnees, &config),
            Err(TrackerError::UnsupportedExercise(ExerciseKind::HighKnees))
        ));
    }
}
