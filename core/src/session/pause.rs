/// Accumulates time spent outside either recognized phase mid-session.
///
/// An interval opens on the first ambiguous (or body-absent) frame and
/// closes on the next unambiguous one; only then is its span added to the
/// total, so an interval can never be counted twice.
#[derive(Debug, Default)]
pub struct PauseTracker {
    pause_start: Option<f64>,
    total_secs: f64,
}

impl PauseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a pause interval unless one is already open.
    pub fn mark_ambiguous(&mut self, timestamp: f64) {
        if self.pause_start.is_none() {
            self.pause_start = Some(timestamp);
        }
    }

    /// Closes an open interval and folds its span into the total.
    pub fn mark_active(&mut self, timestamp: f64) {
        if let Some(start) = self.pause_start.take() {
            self.total_secs += (timestamp - start).max(0.0);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_start.is_some()
    }

    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_accumulates_once_per_open_close_pair() {
        let mut pause = PauseTracker::new();
        pause.mark_ambiguous(10.0);
        pause.mark_active(13.0);
        assert!((pause.total_secs() - 3.0).abs() < 1e-9);

        pause.mark_ambiguous(20.0);
        pause.mark_active(21.5);
        assert!((pause.total_secs() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn reopening_before_close_does_not_double_count() {
        let mut pause = PauseTracker::new();
        pause.mark_ambiguous(10.0);
        pause.mark_ambiguous(11.0);
        pause.mark_ambiguous(12.0);
        pause.mark_active(14.0);
        assert!((pause.total_secs() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn active_frames_without_open_interval_are_noops() {
        let mut pause = PauseTracker::new();
        pause.mark_active(5.0);
        pause.mark_active(6.0);
        assert_eq!(pause.total_secs(), 0.0);
        assert!(!pause.is_paused());
    }

    #[test]
    fn total_never_decreases() {
        let mut pause = PauseTracker::new();
        pause.mark_ambiguous(1.0);
        pause.mark_active(2.0);
        let first = pause.total_secs();
        pause.mark_ambiguous(3.0);
        pause.mark_active(3.0);
        assert!(pause.total_secs() >= first);
    }
}
