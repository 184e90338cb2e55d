//! Clock and frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic millisecond clock with a blocking delay
pub trait Clock {
    /// Milliseconds since the clock was created
    fn now_ms(&self) -> u64;
    /// Block the calling thread for roughly `ms` milliseconds
    fn delay(&mut self, ms: u64);
}

/// Wall-clock time from `std::time`
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn delay(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Turns a clock into per-frame delta times
///
/// Each frame takes at least `target_ms`: if the previous frame finished
/// early, `wait` sleeps for the remainder before measuring.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_ms: u64,
    last_frame_ms: u64,
}

impl FramePacer {
    pub fn new(target_ms: u64) -> Self {
        Self {
            target_ms,
            last_frame_ms: 0,
        }
    }

    /// Record the start time of the first frame
    pub fn start(&mut self, now_ms: u64) {
        self.last_frame_ms = now_ms;
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }

    /// Timestamp of the last completed wait
    pub fn last_frame_ms(&self) -> u64 {
        self.last_frame_ms
    }

    /// Wait out the rest of the frame and return the elapsed time in seconds
    pub fn wait<C: Clock + ?Sized>(&mut self, clock: &mut C) -> f32 {
        let elapsed = clock.now_ms().saturating_sub(self.last_frame_ms);
        if elapsed < self.target_ms {
            clock.delay(self.target_ms - elapsed);
        }

        let now = clock.now_ms();
        let dt = now.saturating_sub(self.last_frame_ms) as f32 / 1000.0;
        self.last_frame_ms = now;
        dt
    }
}
