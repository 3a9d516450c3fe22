/// StepTimer: frame timer with variable or fixed time step.
///
/// Time is tracked in ticks of 100 ns. Each call to `tick()` measures the
/// wall time since the previous call and invokes the update callback:
/// - Variable step: exactly once, with the whole (clamped) delta.
/// - Fixed step: zero or more times, each with exactly the target delta,
///   carrying the remainder over to the next frame.

use std::time::{Duration, Instant};

/// Timer resolution: 10,000,000 ticks per second
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Deltas this close to the fixed target snap onto it (1/4000 s)
const SNAP_TOLERANCE_TICKS: u64 = TICKS_PER_SECOND / 4000;

fn duration_to_ticks(duration: Duration) -> u64 {
    (duration.as_nanos() / 100) as u64
}

/// Frame timer driving per-frame updates.
#[derive(Debug, Clone)]
pub struct StepTimer {
    last_time: Instant,
    max_delta: Duration,

    elapsed_ticks: u64,
    total_ticks: u64,
    left_over_ticks: u64,

    frame_count: u32,
    frames_per_second: u32,
    frames_this_second: u32,
    second_counter: Duration,

    is_fixed_time_step: bool,
    target_elapsed_ticks: u64,
}

impl StepTimer {
    /// Create a variable-step timer targeting 60 updates per second.
    pub fn new() -> Self {
        Self {
            last_time: Instant::now(),
            max_delta: Duration::from_millis(100),
            elapsed_ticks: 0,
            total_ticks: 0,
            left_over_ticks: 0,
            frame_count: 0,
            frames_per_second: 0,
            frames_this_second: 0,
            second_counter: Duration::ZERO,
            is_fixed_time_step: false,
            target_elapsed_ticks: TICKS_PER_SECOND / 60,
        }
    }

    // ===== GETTERS =====

    /// Ticks elapsed during the last update
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Seconds elapsed during the last update
    pub fn elapsed_seconds(&self) -> f64 {
        Self::ticks_to_seconds(self.elapsed_ticks)
    }

    /// Ticks accumulated across all updates
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Seconds accumulated across all updates
    pub fn total_seconds(&self) -> f64 {
        Self::ticks_to_seconds(self.total_ticks)
    }

    /// Number of updates since the timer was created
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Frames rendered during the last full second of wall time
    pub fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }

    pub fn is_fixed_time_step(&self) -> bool {
        self.is_fixed_time_step
    }

    pub fn target_elapsed_ticks(&self) -> u64 {
        self.target_elapsed_ticks
    }

    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }

    pub fn ticks_to_seconds(ticks: u64) -> f64 {
        ticks as f64 / TICKS_PER_SECOND as f64
    }

    pub fn seconds_to_ticks(seconds: f64) -> u64 {
        (seconds * TICKS_PER_SECOND as f64) as u64
    }

    // ===== SETTERS =====

    /// Switch between fixed and variable time step.
    pub fn set_fixed_time_step(&mut self, is_fixed: bool) {
        self.is_fixed_time_step = is_fixed;
    }

    /// Update interval in fixed-step mode. Never shorter than one tick.
    pub fn set_target_elapsed_seconds(&mut self, seconds: f64) {
        self.target_elapsed_ticks = Self::seconds_to_ticks(seconds).max(1);
    }

    /// Largest wall-time delta a single tick accounts for.
    ///
    /// Longer gaps (debugger breaks, window drags) are clamped so the
    /// fixed-step loop does not try to catch up in one frame.
    pub fn set_max_delta(&mut self, max_delta: Duration) {
        self.max_delta = max_delta;
    }

    /// Discard time accumulated since the last tick, e.g. after a pause.
    pub fn reset_elapsed_time(&mut self) {
        self.last_time = Instant::now();
        self.left_over_ticks = 0;
        self.frames_per_second = 0;
        self.frames_this_second = 0;
        self.second_counter = Duration::ZERO;
    }

    // ===== TICKING =====

    /// Measure wall time since the previous tick and run updates.
    pub fn tick<F: FnMut(&StepTimer)>(&mut self, update: F) {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_time);
        self.last_time = now;
        self.advance(delta, update);
    }

    /// Advance the timer by an explicit wall-time delta and run updates.
    pub fn advance<F: FnMut(&StepTimer)>(&mut self, delta: Duration, mut update: F) {
        self.second_counter += delta;

        let clamped = delta.min(self.max_delta);
        if clamped < delta {
            crate::scene_debug!(
                "simple_scene::StepTimer",
                "Frame delta {:.3}s clamped to {:.3}s",
                delta.as_secs_f64(),
                clamped.as_secs_f64()
            );
        }
        let mut delta_ticks = duration_to_ticks(clamped);

        let last_frame_count = self.frame_count;

        if self.is_fixed_time_step {
            // Absorb timer jitter around the target (e.g. 59.94 Hz vsync)
            if delta_ticks.abs_diff(self.target_elapsed_ticks) < SNAP_TOLERANCE_TICKS {
                delta_ticks = self.target_elapsed_ticks;
            }

            self.left_over_ticks += delta_ticks;

            while self.left_over_ticks >= self.target_elapsed_ticks {
                self.elapsed_ticks = self.target_elapsed_ticks;
                self.total_ticks += self.target_elapsed_ticks;
                self.left_over_ticks -= self.target_elapsed_ticks;
                self.frame_count += 1;

                update(&*self);
            }
        } else {
            self.elapsed_ticks = delta_ticks;
            self.total_ticks += delta_ticks;
            self.left_over_ticks = 0;
            self.frame_count += 1;

            update(&*self);
        }

        if self.frame_count != last_frame_count {
            self.frames_this_second += 1;
        }

        if self.second_counter >= Duration::from_secs(1) {
            self.frames_per_second = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_counter = Duration::from_nanos(
                (self.second_counter.as_nanos() % 1_000_000_000) as u64,
            );
        }
    }
}

impl Default for StepTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "step_timer_tests.rs"]
mod tests;
