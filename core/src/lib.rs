//! Session-analysis core for the pose-driven exercise tracker.
//!
//! The modules turn a stream of body-landmark frames into repetition counts
//! and a post-workout summary: per-exercise phase detectors, a shared
//! repetition state machine, pause tracking, and the scoring engine.

pub mod detectors;
pub mod math;
pub mod pose_interface;
pub mod prelude;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use prelude::{
    ExerciseDetector, FrameStatus, PhaseReading, PhaseSignal, TrackerConfig, TrackerError,
    TrackerResult,
};
