use crate::pose_interface::{ExerciseKind, Landmark};
use serde::{Deserialize, Serialize};

/// Intensity multipliers applied to the per-minute metabolic rate, one per
/// supported exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityTable {
    pub jumping_jacks: f64,
    pub high_knees: f64,
    pub squats: f64,
    pub pushups: f64,
    pub generic: f64,
}

impl Default for IntensityTable {
    fn default() -> Self {
        Self {
            jumping_jacks: 8.0,
            high_knees: 8.5,
            squats: 6.5,
            pushups: 7.0,
            generic: 6.0,
        }
    }
}

impl IntensityTable {
    pub fn multiplier(&self, kind: ExerciseKind) -> f64 {
        match kind {
            ExerciseKind::JumpingJacks => self.jumping_jacks,
            ExerciseKind::HighKnees => self.high_knees,
            ExerciseKind::Squats => self.squats,
            ExerciseKind::Pushups => self.pushups,
            ExerciseKind::Generic => self.generic,
        }
    }
}

/// Shared configuration for detectors and the scoring engine.
///
/// Defaults carry the reference thresholds; the gap between the "open" and
/// "closed" cutoffs of each exercise is a deliberate hysteresis band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Wrists must sit above the shoulders by this margin (normalized image
    /// height) to count as raised.
    pub hand_raise_margin: f32,
    /// Ankle gap above which the feet count as apart.
    pub feet_apart_min: f32,
    /// Ankle gap below which the feet count as together.
    pub feet_together_max: f32,
    /// Elbow angle below which a push-up counts as down.
    pub elbow_down_deg: f32,
    /// Knee angle below which a squat counts as down.
    pub knee_down_deg: f32,
    /// Joint angle above which a limb counts as extended.
    pub extended_deg: f32,
    /// Assumed height for male-coded profiles (height is not collected).
    pub assumed_height_male_cm: f64,
    pub assumed_height_other_cm: f64,
    pub intensity: IntensityTable,
    /// Normalization divisor applied to every intensity multiplier.
    pub intensity_divisor: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            hand_raise_margin: 0.1,
            feet_apart_min: 0.25,
            feet_together_max: 0.15,
            elbow_down_deg: 90.0,
            knee_down_deg: 115.0,
            extended_deg: 160.0,
            assumed_height_male_cm: 170.0,
            assumed_height_other_cm: 160.0,
            intensity: IntensityTable::default(),
            intensity_divisor: 1.5,
        }
    }
}

/// Discrete phase classification of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseSignal {
    Open,
    Closed,
    Ambiguous,
}

/// Per-frame detector output consumed by the repetition state machine.
#[derive(Debug, Clone, Copy)]
pub struct PhaseReading {
    pub signal: PhaseSignal,
    /// Whether this frame qualifies to arm a not-yet-started session.
    pub ready: bool,
    /// Mean landmark visibility in [0, 1]; a data-quality signal, not a
    /// phase signal.
    pub visibility: f32,
}

/// Incremental result reported after each processed frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameStatus {
    pub status_text: String,
    pub reps: u32,
}

/// Common error type for frame evaluation.
#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    #[error("missing landmark: {0}")]
    MissingLandmark(String),
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
    #[error("no detector available for exercise {0}")]
    UnsupportedExercise(ExerciseKind),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Trait describing per-exercise phase detection over a landmark frame.
pub trait ExerciseDetector {
    fn kind(&self) -> ExerciseKind;
    /// Short hint shown while waiting for the session to arm.
    fn waiting_hint(&self) -> &'static str;
    fn evaluate(&self, landmarks: &[Landmark]) -> TrackerResult<PhaseReading>;
}
