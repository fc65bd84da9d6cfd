use crate::prelude::{
    ExerciseDetector, FrameStatus, PhaseSignal, TrackerConfig, TrackerResult,
};
use crate::math::RunningMean;
use crate::pose_interface::{PoseFrame, UserProfile, WorkoutSummary};
use crate::scoring::{calories, stamina};
use crate::session::machine::{RepEvent, RepMachine};
use crate::session::pause::PauseTracker;
use crate::session::timer::SessionClock;
use crate::telemetry::{LogManager, MetricsRecorder};

/// Per-session owner of all mutable tracking state.
///
/// Frame processing is serialized through `&mut self`; the pose source must
/// not deliver a frame while a previous one is still being processed.
pub struct SessionTracker {
    detector: Box<dyn ExerciseDetector>,
    machine: RepMachine,
    pause: PauseTracker,
    score: RunningMean,
    config: TrackerConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl SessionTracker {
    pub fn new(detector: Box<dyn ExerciseDetector>, config: TrackerConfig) -> Self {
        Self {
            detector,
            machine: RepMachine::new(),
            pause: PauseTracker::new(),
            score: RunningMean::default(),
            config,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn reps(&self) -> u32 {
        self.machine.reps()
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Ingests one pose-source callback payload.
    ///
    /// An absent body is data, not an error: after the session has armed it
    /// opens a pause interval (an absent exerciser is resting, not
    /// repping); before arming it only refreshes the waiting status.
    pub fn on_frame(&mut self, frame: &PoseFrame) -> TrackerResult<FrameStatus> {
        self.metrics.record_frame();

        let Some(landmarks) = frame.landmarks.as_deref() else {
            self.metrics.record_missed();
            if self.machine.started_at().is_some() {
                self.pause.mark_ambiguous(frame.timestamp);
                return Ok(self.running_status(frame.timestamp));
            }
            return Ok(self.waiting_status());
        };

        let reading = match self.detector.evaluate(landmarks) {
            Ok(reading) => reading,
            Err(err) => {
                self.logger.alert(&format!("frame rejected: {err}"));
                return Err(err);
            }
        };
        let event = self.machine.advance(&reading, frame.timestamp);

        if self.machine.started_at().is_none() {
            return Ok(self.waiting_status());
        }

        self.score.push(f64::from(reading.visibility));
        match reading.signal {
            PhaseSignal::Ambiguous => self.pause.mark_ambiguous(frame.timestamp),
            PhaseSignal::Open | PhaseSignal::Closed => self.pause.mark_active(frame.timestamp),
        }

        if event == RepEvent::Counted {
            self.logger
                .record(&format!("rep {} counted", self.machine.reps()));
        }

        Ok(self.running_status(frame.timestamp))
    }

    /// Produces the final summary. Safe to call before any frame arrived:
    /// everything defaults to zero and calories are exactly 0.00.
    pub fn end_session(&self, profile: &UserProfile, now: f64) -> WorkoutSummary {
        let duration_secs = SessionClock::elapsed_secs(self.machine.started_at(), now);
        let reps = self.machine.reps();
        let avg_pose_score = self.score.mean();
        let pause_secs = self.pause.total_secs();

        let rating = stamina::evaluate_stamina(
            profile.age,
            reps,
            duration_secs,
            avg_pose_score,
            pause_secs,
        );
        let kcal = calories::estimate_calories(
            profile,
            self.detector.kind(),
            duration_secs,
            &self.config,
        );

        WorkoutSummary {
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender,
            weight_kg: profile.weight_kg,
            exercise: self.detector.kind(),
            duration_secs,
            reps,
            avg_pose_score,
            pause_secs,
            stamina: rating,
            calories_kcal: kcal,
        }
    }

    fn waiting_status(&self) -> FrameStatus {
        FrameStatus {
            status_text: format!("Waiting for {}...", self.detector.waiting_hint()),
            reps: 0,
        }
    }

    fn running_status(&self, now: f64) -> FrameStatus {
        let elapsed = SessionClock::elapsed_secs(self.machine.started_at(), now);
        FrameStatus {
            status_text: format!(
                "Reps: {} | Time: {}s",
                self.machine.reps(),
                SessionClock::display_secs(elapsed)
            ),
            reps: self.machine.reps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::detector_for;
    use crate::pose_interface::frame::{
        LANDMARK_COUNT, LEFT_ANKLE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_SHOULDER,
        RIGHT_WRIST,
    };
    use crate::pose_interface::{ExerciseKind, Gender, Landmark};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Adi".into(),
            age: 18,
            gender: Gender::Male,
            weight_kg: 65.0,
        }
    }

    fn tracker() -> SessionTracker {
        let config = TrackerConfig::default();
        let detector = detector_for(ExerciseKind::JumpingJacks, &config).unwrap();
        SessionTracker::new(detector, config)
    }

    fn jack_frame(timestamp: f64, wrist_y: f32, ankle_gap: f32) -> PoseFrame {
        let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0, 0.9); LANDMARK_COUNT];
        landmarks[LEFT_SHOULDER] = Landmark::new(0.45, 0.3, 0.0, 0.9);
        landmarks[RIGHT_SHOULDER] = Landmark::new(0.55, 0.3, 0.0, 0.9);
        landmarks[LEFT_WRIST] = Landmark::new(0.4, wrist_y, 0.0, 0.9);
        landmarks[RIGHT_WRIST] = Landmark::new(0.6, wrist_y, 0.0, 0.9);
        landmarks[LEFT_ANKLE] = Landmark::new(0.5 - ankle_gap / 2.0, 0.9, 0.0, 0.9);
        landmarks[RIGHT_ANKLE] = Landmark::new(0.5 + ankle_gap / 2.0, 0.9, 0.0, 0.9);
        PoseFrame::detected(timestamp, landmarks)
    }

    fn open_frame(timestamp: f64) -> PoseFrame {
        jack_frame(timestamp, 0.1, 0.3)
    }

    fn closed_frame(timestamp: f64) -> PoseFrame {
        jack_frame(timestamp, 0.55, 0.1)
    }

    #[test]
    fn closed_frames_before_arming_keep_waiting() {
        let mut tracker = tracker();
        let status = tracker.on_frame(&closed_frame(0.0)).unwrap();
        assert!(status.status_text.starts_with("Waiting"));
        assert_eq!(status.reps, 0);
        assert_eq!(tracker.pause.total_secs(), 0.0);
    }

    #[test]
    fn full_cycles_count_one_rep_each() {
        let mut tracker = tracker();
        for i in 0..3 {
            let t = f64::from(i) * 2.0;
            tracker.on_frame(&open_frame(t)).unwrap();
            tracker.on_frame(&closed_frame(t + 1.0)).unwrap();
        }
        assert_eq!(tracker.reps(), 3);
    }

    #[test]
    fn status_reports_reps_and_floored_elapsed() {
        let mut tracker = tracker();
        tracker.on_frame(&open_frame(2.0)).unwrap();
        let status = tracker.on_frame(&closed_frame(5.5)).unwrap();
        assert_eq!(status.status_text, "Reps: 1 | Time: 3s");
        assert_eq!(status.reps, 1);
    }

    #[test]
    fn ambiguous_posture_opens_and_closes_a_pause() {
        let mut tracker = tracker();
        tracker.on_frame(&open_frame(0.0)).unwrap();
        // ankle gap inside the hysteresis band: neither open nor closed
        tracker.on_frame(&jack_frame(1.0, 0.55, 0.2)).unwrap();
        tracker.on_frame(&jack_frame(2.0, 0.55, 0.2)).unwrap();
        tracker.on_frame(&closed_frame(4.0)).unwrap();
        assert!((tracker.pause.total_secs() - 3.0).abs() < 1e-9);
        assert_eq!(tracker.reps(), 1);
    }

    #[test]
    fn absent_body_after_start_opens_a_pause() {
        let mut tracker = tracker();
        tracker.on_frame(&open_frame(0.0)).unwrap();
        tracker.on_frame(&PoseFrame::absent(1.0)).unwrap();
        assert!(tracker.pause.is_paused());
        tracker.on_frame(&closed_frame(3.0)).unwrap();
        assert!((tracker.pause.total_secs() - 2.0).abs() < 1e-9);
        assert_eq!(tracker.metrics().snapshot().1, 1);
    }

    #[test]
    fn absent_body_before_start_is_only_a_status_update() {
        let mut tracker = tracker();
        let status = tracker.on_frame(&PoseFrame::absent(0.0)).unwrap();
        assert!(status.status_text.starts_with("Waiting"));
        assert!(!tracker.pause.is_paused());
    }

    #[test]
    fn end_session_without_frames_yields_zero_summary() {
        let tracker = tracker();
        let summary = tracker.end_session(&profile(), 99.0);
        assert_eq!(summary.reps, 0);
        assert_eq!(summary.duration_secs, 0.0);
        assert_eq!(summary.avg_pose_score, 0.0);
        assert_eq!(summary.calories_kcal, 0.0);
    }

    #[test]
    fn end_session_reports_accumulated_statistics() {
        let mut tracker = tracker();
        tracker.on_frame(&open_frame(0.0)).unwrap();
        tracker.on_frame(&closed_frame(30.0)).unwrap();
        tracker.on_frame(&open_frame(31.0)).unwrap();
        tracker.on_frame(&closed_frame(60.0)).unwrap();

        let summary = tracker.end_session(&profile(), 60.0);
        assert_eq!(summary.reps, 2);
        assert_eq!(summary.duration_secs, 60.0);
        assert!((summary.avg_pose_score - 0.9).abs() < 1e-6);
        // male, 65 kg, 18 y, jumping jacks, one minute
        assert_eq!(summary.calories_kcal, 6.03);
    }
}
