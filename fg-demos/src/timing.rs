//! Frame durations fed to the demos.

use std::thread;
use std::time::{Duration, Instant};

/// Supplies the duration of each frame in seconds.
pub trait FrameClock {
    fn next_frame(&mut self) -> f64;
}

/// Every frame lasts exactly `dt` seconds.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f64,
}

impl FrameClock for FixedClock {
    fn next_frame(&mut self) -> f64 {
        self.dt
    }
}

/// Paces frames in wall-clock time and reports the measured duration.
#[derive(Debug)]
pub struct RealtimeClock {
    target: Duration,
    last: Instant,
}

impl RealtimeClock {
    pub fn new(target_seconds: f64) -> Self {
        Self {
            target: Duration::from_secs_f64(target_seconds.max(0.0)),
            last: Instant::now(),
        }
    }
}

impl FrameClock for RealtimeClock {
    fn next_frame(&mut self) -> f64 {
        let elapsed = self.last.elapsed();
        if elapsed < self.target {
            thread::sleep(self.target - elapsed);
        }
        let now = Instant::now();
        // Whole milliseconds, as a frame timer would report them.
        let millis = now.duration_since(self.last).as_millis() as f64;
        self.last = now;
        millis * 0.001
    }
}
