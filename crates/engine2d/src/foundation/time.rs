//! Time management utilities

use std::time::Instant;

/// Per-frame simulation clock
///
/// Holds the elapsed time of the current frame and the accumulated total.
/// Advanced exactly once per frame by the [`Engine`](crate::Engine) before
/// any update or draw work runs.
#[derive(Debug, Clone, Default)]
pub struct EngineClock {
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl EngineClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame
    ///
    /// Negative or non-finite deltas are treated as zero so a misbehaving
    /// clock source cannot move the simulation backwards.
    pub fn advance(&mut self, delta_time: f32) {
        let delta_time = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            log::warn!("Ignoring invalid frame delta {delta_time}, using 0");
            0.0
        };

        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total simulated time in seconds
    pub const fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the number of frames advanced so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Reset to time zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Wall-clock frame timer
///
/// A clock source for hosts that run in real time: each call to
/// [`tick`](Self::tick) returns the seconds elapsed since the previous call.
pub struct FrameTimer {
    last_frame: Instant,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new timer starting now
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Measure the time since the previous tick (should be called once per frame)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed.as_secs_f32()
    }
}
