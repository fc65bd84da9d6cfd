use fitcore::pose_interface::WorkoutSummary;
use serde::{Deserialize, Serialize};

/// What a presentation layer polls: live status text, the running rep
/// count, and the final summary once a session has ended.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionModel {
    pub status_text: String,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<WorkoutSummary>,
}

impl SessionModel {
    pub fn from_outcome(outcome: &crate::workflow::runner::SessionOutcome) -> Self {
        Self {
            status_text: outcome.last_status.status_text.clone(),
            reps: outcome.summary.reps,
            summary: Some(outcome.summary.clone()),
        }
    }
}
