use crate::pose_interface::Landmark;

pub struct StatsHelper;

impl StatsHelper {
    /// Mean visibility across all landmarks of a frame, in [0, 1].
    pub fn mean_visibility(landmarks: &[Landmark]) -> f32 {
        if landmarks.is_empty() {
            return 0.0;
        }
        let sum: f32 = landmarks.iter().map(|lm| lm.visibility).sum();
        sum / landmarks.len() as f32
    }
}

/// Sufficient statistics for an exact running average.
#[derive(Debug, Clone, Default)]
pub struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
