pub struct SessionClock;

impl SessionClock {
    /// Elapsed seconds since the session armed; zero when it never did.
    pub fn elapsed_secs(started_at: Option<f64>, now: f64) -> f64 {
        started_at.map_or(0.0, |start| (now - start).max(0.0))
    }

    /// Whole seconds for status display.
    pub fn display_secs(elapsed: f64) -> u64 {
        elapsed.floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_start_means_zero_elapsed() {
        assert_eq!(SessionClock::elapsed_secs(None, 42.0), 0.0);
    }

    #[test]
    fn elapsed_is_anchored_to_start() {
        assert!((SessionClock::elapsed_secs(Some(10.0), 13.25) - 3.25).abs() < 1e-9);
    }

    #[test]
    fn display_floors_fractional_seconds() {
        assert_eq!(SessionClock::display_secs(3.99), 3);
        assert_eq!(SessionClock::display_secs(4.0), 4);
    }
}
