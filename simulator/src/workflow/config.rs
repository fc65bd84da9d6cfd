use anyhow::Context;
use fitcore::pose_interface::{ExerciseKind, Gender, UserProfile};
use fitcore::prelude::TrackerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_fps() -> f64 {
    15.0
}

fn default_target_reps() -> u32 {
    10
}

/// Session description for an offline run: who is exercising, which
/// exercise, and optional threshold overrides for the core.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    pub exercise: ExerciseKind,
    pub profile: UserProfile,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default = "default_fps")]
    pub fps: f64,
    #[serde(default = "default_target_reps")]
    pub target_reps: u32,
}

impl SessionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading session config {}", path_ref.display()))?;
        let config: SessionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing session config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(exercise: &str, target_reps: u32, fps: f64) -> Self {
        Self {
            exercise: ExerciseKind::parse(exercise),
            profile: UserProfile {
                name: "Adi".into(),
                age: 18,
                gender: Gender::Male,
                weight_kg: 65.0,
            },
            tracker: TrackerConfig::default(),
            fps,
            target_reps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_parses_the_exercise_name() {
        let cfg = SessionConfig::from_args("squats", 8, 20.0);
        assert_eq!(cfg.exercise, ExerciseKind::Squats);
        assert_eq!(cfg.target_reps, 8);
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"exercise: pushups\nprofile:\n  name: Mira\n  age: 28\n  gender: female\n  weight_kg: 58.0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = SessionConfig::load(&path).unwrap();
        assert_eq!(cfg.exercise, ExerciseKind::Pushups);
        assert_eq!(cfg.profile.age, 28);
        assert_eq!(cfg.fps, 15.0);
        assert_eq!(cfg.tracker.feet_apart_min, 0.25);
    }
}
