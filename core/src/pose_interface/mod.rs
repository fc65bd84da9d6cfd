pub mod frame;
pub mod summary;

pub use frame::{Landmark, PoseFrame};
pub use summary::{ExerciseKind, Gender, UserProfile, WorkoutSummary};
