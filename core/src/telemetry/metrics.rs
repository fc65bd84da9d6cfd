use std::sync::Mutex;

/// Frame accounting for a session: how many frames arrived and how many
/// carried no detected body.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    frames: usize,
    missed: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                frames: 0,
                missed: 0,
            }),
        }
    }

    pub fn record_frame(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames += 1;
        }
    }

    pub fn record_missed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.missed += 1;
        }
    }

    /// Returns `(frames, missed)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.frames, metrics.missed)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
