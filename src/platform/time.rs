//! Tick pacing
//!
//! The frame loop calls [`Pacer::wait`] once after every frame. This is the
//! only place the program blocks.

use std::time::{Duration, Instant};

/// Blocks until the next frame may start
pub trait Pacer {
    fn wait(&mut self);
}

/// Sleeps so frames start at a fixed rate.
///
/// When a frame overruns its slot the schedule restarts from now instead of
/// trying to catch up with a burst of frames.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRatePacer {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Pacer for FixedRatePacer {
    fn wait(&mut self) {
        let now = Instant::now();
        let target = self.next.unwrap_or(now + self.period);

        if target > now {
            std::thread::sleep(target - now);
            self.next = Some(target + self.period);
        } else {
            let behind = now - target;
            if behind > self.period {
                log::warn!("Frame pacing fell behind by {:?}", behind);
            }
            self.next = Some(now + self.period);
        }
    }
}

/// Never waits; for tests and offline runs
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        assert_eq!(FixedRatePacer::new(50).period(), Duration::from_millis(20));
        // Zero is treated as 1 Hz rather than dividing by zero
        assert_eq!(FixedRatePacer::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_paces_frames() {
        let mut pacer = FixedRatePacer::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait();
        }
        // Four 5 ms slots
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
