pub mod machine;
pub mod pause;
pub mod timer;
pub mod tracker;

pub use machine::{RepEvent, RepMachine, RepState};
pub use pause::PauseTracker;
pub use timer::SessionClock;
pub use tracker::SessionTracker;
