use crate::generator::template::neutral_skeleton;
use anyhow::bail;
use fitcore::pose_interface::frame::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_HIP,
    RIGHT_WRIST,
};
use fitcore::pose_interface::{ExerciseKind, Landmark, PoseFrame};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic landmark stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub exercise: ExerciseKind,
    /// Open/closed cycles to emit; each one counts as a repetition.
    pub reps: u32,
    /// Frames spent holding each posture.
    pub hold_frames: usize,
    pub fps: f64,
    /// Positional jitter applied to every landmark, in normalized units.
    pub noise: f32,
    pub visibility: f32,
    pub seed: u64,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            exercise: ExerciseKind::JumpingJacks,
            reps: 10,
            hold_frames: 4,
            fps: 15.0,
            noise: 0.005,
            visibility: 0.92,
            seed: 0,
            description: None,
            scenario: None,
        }
    }
}

fn open_posture(exercise: ExerciseKind, visibility: f32) -> anyhow::Result<Vec<Landmark>> {
    let mut landmarks = neutral_skeleton(visibility);
    match exercise {
        ExerciseKind::JumpingJacks => {
            // arms overhead, feet well apart
            landmarks[LEFT_WRIST] = Landmark::new(0.40, 0.15, 0.0, visibility);
            landmarks[RIGHT_WRIST] = Landmark::new(0.60, 0.15, 0.0, visibility);
            landmarks[LEFT_ANKLE] = Landmark::new(0.35, 0.90, 0.0, visibility);
            landmarks[RIGHT_ANKLE] = Landmark::new(0.65, 0.90, 0.0, visibility);
        }
        ExerciseKind::Pushups => {
            // sharply flexed elbow, interior angle far below the down cutoff
            landmarks[LEFT_SHOULDER] = Landmark::new(0.40, 0.50, 0.0, visibility);
            landmarks[LEFT_ELBOW] = Landmark::new(0.50, 0.50, 0.0, visibility);
            landmarks[LEFT_WRIST] = Landmark::new(0.41, 0.46, 0.0, visibility);
        }
        ExerciseKind::Squats => {
            // hips dropped back and down, knees flexed past the cutoff
            landmarks[LEFT_HIP] = Landmark::new(0.63, 0.70, 0.0, visibility);
            landmarks[RIGHT_HIP] = Landmark::new(0.73, 0.70, 0.0, visibility);
        }
        other => bail!("no posture template for exercise {other}"),
    }
    Ok(landmarks)
}

fn closed_posture(exercise: ExerciseKind, visibility: f32) -> anyhow::Result<Vec<Landmark>> {
    match exercise {
        ExerciseKind::JumpingJacks | ExerciseKind::Pushups | ExerciseKind::Squats => {
            // the neutral stand-up is the rest posture for all three
            Ok(neutral_skeleton(visibility))
        }
        other => bail!("no posture template for exercise {other}"),
    }
}

fn jitter(landmarks: &mut [Landmark], rng: &mut StdRng, noise: f32) {
    if noise <= 0.0 {
        return;
    }
    for lm in landmarks {
        lm.x += rng.gen_range(-noise..noise);
        lm.y += rng.gen_range(-noise..noise);
    }
}

/// Emits `reps` open/closed cycles of the configured exercise, each posture
/// held for `hold_frames` frames, timestamps spaced at the configured rate.
pub fn build_frame_sequence(config: &GeneratorConfig) -> anyhow::Result<Vec<PoseFrame>> {
    let hold = config.hold_frames.max(1);
    let fps = if config.fps > 0.0 { config.fps } else { 15.0 };
    let open = open_posture(config.exercise, config.visibility)?;
    let closed = closed_posture(config.exercise, config.visibility)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut frames = Vec::with_capacity(config.reps as usize * hold * 2);

    for _ in 0..config.reps {
        for posture in [&open, &closed] {
            for _ in 0..hold {
                let mut landmarks = posture.clone();
                jitter(&mut landmarks, &mut rng, config.noise);
                let timestamp = frames.len() as f64 / fps;
                frames.push(PoseFrame::detected(timestamp, landmarks));
            }
        }
    }

    Ok(frames)
}

/// Convenience wrapper for the common "N reps of this exercise" case.
#[allow(dead_code)]
pub fn build_session_frames(exercise: ExerciseKind, reps: u32) -> anyhow::Result<Vec<PoseFrame>> {
    build_frame_sequence(&GeneratorConfig {
        exercise,
        reps,
        ..Default::default()
    })
}
