use crate::prelude::{PhaseReading, PhaseSignal};

/// Phase of the oscillation: idle before the first qualifying frame, then
/// open/closed. A repetition is counted on the open-to-closed edge only,
/// never on closed-to-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepState {
    NotStarted,
    Closed,
    Open,
}

/// What a single frame did to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepEvent {
    /// Session not yet armed; frame ignored.
    Idle,
    Opened,
    /// Returned to rest; the counter advanced by one.
    Counted,
    /// No transition fired.
    Held,
}

/// Exercise-agnostic repetition state machine.
#[derive(Debug, Default)]
pub struct RepMachine {
    state: Option<ActiveState>,
    reps: u32,
}

#[derive(Debug, Clone, Copy)]
struct ActiveState {
    phase: Phase,
    started_at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open,
}

impl RepMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn started_at(&self) -> Option<f64> {
        self.state.map(|s| s.started_at)
    }

    pub fn state(&self) -> RepState {
        match self.state {
            None => RepState::NotStarted,
            Some(ActiveState {
                phase: Phase::Closed,
                ..
            }) => RepState::Closed,
            Some(ActiveState {
                phase: Phase::Open, ..
            }) => RepState::Open,
        }
    }

    /// Advances the machine by one frame. The arming frame enters `Closed`
    /// and may take the closed-to-open transition in the same call, so an
    /// opening first move is not lost.
    pub fn advance(&mut self, reading: &PhaseReading, timestamp: f64) -> RepEvent {
        if self.state.is_none() {
            if !reading.ready {
                return RepEvent::Idle;
            }
            self.state = Some(ActiveState {
                phase: Phase::Closed,
                started_at: timestamp,
            });
        }
        let Some(state) = self.state.as_mut() else {
            return RepEvent::Idle;
        };

        match (state.phase, reading.signal) {
            (Phase::Closed, PhaseSignal::Open) => {
                state.phase = Phase::Open;
                RepEvent::Opened
            }
            (Phase::Open, PhaseSignal::Closed) => {
                state.phase = Phase::Closed;
                self.reps += 1;
                RepEvent::Counted
            }
            _ => RepEvent::Held,
        }
    }
}
