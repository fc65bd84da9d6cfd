use fitcore::pose_interface::frame::{
    LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use fitcore::pose_interface::Landmark;

/// Neutral standing skeleton in normalized image coordinates: arms hanging,
/// feet roughly together. Postures are derived by nudging joints from here.
pub fn neutral_skeleton(visibility: f32) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(0.5, 0.15, 0.0, visibility); LANDMARK_COUNT];

    let place = |landmarks: &mut Vec<Landmark>, index: usize, x: f32, y: f32| {
        landmarks[index] = Landmark::new(x, y, 0.0, visibility);
    };

    place(&mut landmarks, LEFT_SHOULDER, 0.43, 0.30);
    place(&mut landmarks, RIGHT_SHOULDER, 0.57, 0.30);
    place(&mut landmarks, LEFT_ELBOW, 0.40, 0.42);
    place(&mut landmarks, RIGHT_ELBOW, 0.60, 0.42);
    place(&mut landmarks, LEFT_WRIST, 0.38, 0.55);
    place(&mut landmarks, RIGHT_WRIST, 0.62, 0.55);
    place(&mut landmarks, LEFT_HIP, 0.45, 0.55);
    place(&mut landmarks, RIGHT_HIP, 0.55, 0.55);
    place(&mut landmarks, LEFT_KNEE, 0.45, 0.72);
    place(&mut landmarks, RIGHT_KNEE, 0.55, 0.72);
    place(&mut landmarks, LEFT_ANKLE, 0.45, 0.90);
    place(&mut landmarks, RIGHT_ANKLE, 0.55, 0.90);

    landmarks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_the_full_landmark_set() {
        let skeleton = neutral_skeleton(0.9);
        assert_eq!(skeleton.len(), LANDMARK_COUNT);
        assert!(skeleton.iter().all(|lm| (lm.visibility - 0.9).abs() < 1e-6));
    }
}
