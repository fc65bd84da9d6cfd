use crate::workflow::config::SessionConfig;
use anyhow::Context;
use fitcore::detectors::detector_for;
use fitcore::pose_interface::{PoseFrame, WorkoutSummary};
use fitcore::prelude::FrameStatus;
use fitcore::session::SessionTracker;
use log::info;

pub struct SessionOutcome {
    pub summary: WorkoutSummary,
    pub last_status: FrameStatus,
    pub frames: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: SessionConfig,
}

impl Runner {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Drives a full frame sequence through one tracking session and ends it
    /// at the last frame's timestamp.
    pub fn execute(&self, frames: &[PoseFrame]) -> anyhow::Result<SessionOutcome> {
        let detector = detector_for(self.config.exercise, &self.config.tracker)
            .context("building exercise detector")?;
        let mut tracker = SessionTracker::new(detector, self.config.tracker.clone());

        let mut last_status = FrameStatus::default();
        for frame in frames {
            last_status = tracker
                .on_frame(frame)
                .with_context(|| format!("processing frame at {:.3}s", frame.timestamp))?;
        }

        let end = frames.last().map_or(0.0, |frame| frame.timestamp);
        let summary = tracker.end_session(&self.config.profile, end);
        info!(
            "session finished: {} reps of {} in {:.1}s",
            summary.reps, summary.exercise, summary.duration_secs
        );

        Ok(SessionOutcome {
            summary,
            last_status,
            frames: frames.len(),
        })
    }
}
