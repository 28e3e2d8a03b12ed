//! Frame clock

use std::cell::Cell;
use std::time::Instant;

use crate::consts::MAX_FRAME_DT;

pub trait Clock {
    /// Seconds since an arbitrary origin
    fn now(&self) -> f64;
}

/// Monotonic wall clock
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to (headless runs, tests)
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Turns clock readings into frame deltas
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame: f64,
}

impl FrameTimer {
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            last_frame: clock.now(),
        }
    }

    /// Seconds since the previous call, clamped to `MAX_FRAME_DT`
    pub fn delta(&mut self, clock: &impl Clock) -> f32 {
        let now = clock.now();
        let dt = (now - self.last_frame).max(0.0) as f32;
        self.last_frame = now;
        if dt > MAX_FRAME_DT {
            log::warn!("Frame took {dt:.3}s, clamping to {MAX_FRAME_DT}s");
            return MAX_FRAME_DT;
        }
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timer_deltas() {
        let clock = ManualClock::new(10.0);
        let mut timer = FrameTimer::new(&clock);

        clock.advance(0.016);
        assert!((timer.delta(&clock) - 0.016).abs() < 1e-6);

        assert_eq!(timer.delta(&clock), 0.0);

        clock.advance(2.0);
        assert_eq!(timer.delta(&clock), MAX_FRAME_DT);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::default();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
