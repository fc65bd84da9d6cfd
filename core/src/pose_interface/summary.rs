use crate::scoring::stamina::StaminaRating;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender category as used by the metabolic-rate formula. Only male-coded
/// vs. not changes the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

/// Supported exercise kinds. High-knees and generic carry no dedicated
/// detector and exist for the calorie table only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    JumpingJacks,
    HighKnees,
    Squats,
    Pushups,
    Generic,
}

impl ExerciseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JumpingJacks => "jumping_jacks",
            Self::HighKnees => "high_knees",
            Self::Squats => "squats",
            Self::Pushups => "pushups",
            Self::Generic => "generic",
        }
    }

    /// Parses the wire name; unknown names fall back to `Generic`, matching
    /// the calorie table lookup behavior.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "jumping_jacks" => Self::JumpingJacks,
            "high_knees" => Self::HighKnees,
            "squats" => Self::Squats,
            "pushups" => Self::Pushups,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only user data consumed by the scoring engine. Validation is the
/// caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
}

/// Immutable end-of-session snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub exercise: ExerciseKind,
    pub duration_secs: f64,
    pub reps: u32,
    pub avg_pose_score: f64,
    pub pause_secs: f64,
    pub stamina: StaminaRating,
    pub calories_kcal: f64,
}

impl WorkoutSummary {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "age": self.age,
            "gender": self.gender,
            "weight_kg": self.weight_kg,
            "exercise": self.exercise,
            "duration_secs": self.duration_secs,
            "reps": self.reps,
            "avg_pose_score": self.avg_pose_score,
            "pause_secs": self.pause_secs,
            "stamina": self.stamina.label(),
            "calories_kcal": self.calories_kcal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_kind_parse_falls_back_to_generic() {
        assert_eq!(ExerciseKind::parse("Jumping_Jacks"), ExerciseKind::JumpingJacks);
        assert_eq!(ExerciseKind::parse("yoga"), ExerciseKind::Generic);
    }

    #[test]
    fn summary_serializes_wire_names() {
        let summary = WorkoutSummary {
            name: "Adi".into(),
            age: 18,
            gender: Gender::Male,
            weight_kg: 65.0,
            exercise: ExerciseKind::JumpingJacks,
            duration_secs: 60.0,
            reps: 12,
            avg_pose_score: 0.91,
            pause_secs: 2.5,
            stamina: StaminaRating::Elite,
            calories_kcal: 6.03,
        };

        let value = summary.to_json();
        assert_eq!(value["exercise"], "jumping_jacks");
        assert_eq!(value["stamina"], "Elite");
        assert_eq!(value["calories_kcal"], 6.03);
    }
}
