//! Tick pacing

use std::time::{Duration, Instant};

/// Blocks until the next tick boundary
pub trait Pacer {
    fn wait(&mut self);
}

/// Sleeps to a fixed schedule. A late frame realigns the schedule instead
/// of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FixedRate {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRate {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }
}

impl Pacer for FixedRate {
    fn wait(&mut self) {
        let now = Instant::now();
        let target = self.next.unwrap_or(now) + self.period;
        if target > now {
            std::thread::sleep(target - now);
            self.next = Some(target);
        } else {
            log::trace!("Frame overran by {:?}", now - target);
            self.next = Some(now);
        }
    }
}

/// Runs ticks back to back (tests, benchmarks, headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rate_paces_frames() {
        let mut pacer = FixedRate::new(Duration::from_millis(5));
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_fixed_rate_realigns_after_stall() {
        let mut pacer = FixedRate::new(Duration::from_millis(2));
        pacer.wait();
        std::thread::sleep(Duration::from_millis(20));
        // Late: returns immediately and restarts the schedule from now
        let before = Instant::now();
        pacer.wait();
        assert!(before.elapsed() < Duration::from_millis(15));
        let resumed = Instant::now();
        pacer.wait();
        assert!(resumed.elapsed() >= Duration::from_millis(1));
    }
}
