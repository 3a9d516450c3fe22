//! Timer module: frame timing for the update loop.

mod step_timer;

pub use step_timer::{StepTimer, TICKS_PER_SECOND};
