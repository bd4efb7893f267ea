//! Periodic time sampler
//!
//! A repeating schedule polled by the host's `tick` calls. Pausing defers
//! the next fire indefinitely instead of tearing the schedule down, so
//! resuming costs nothing mid-session.

use std::time::{Duration, Instant};

/// Repeating fire schedule for time sampling
#[derive(Debug, Clone)]
pub(crate) struct Sampler {
    period: Duration,
    next_fire: Option<Instant>,
}

impl Sampler {
    pub(crate) fn new(period: Duration) -> Self {
        Self {
            period,
            next_fire: None,
        }
    }

    /// Arm the schedule; the first poll at or after `now` fires
    pub(crate) fn arm(&mut self, now: Instant) {
        self.next_fire = Some(now);
    }

    /// Push the next fire to "never" without discarding the schedule
    pub(crate) fn defer_fire(&mut self) {
        self.next_fire = None;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Check whether the schedule is due; advances the next fire when it is
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(at) if now >= at => {
                self.next_fire = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_period() {
        let start = Instant::now();
        let mut sampler = Sampler::new(Duration::from_millis(500));
        sampler.arm(start);

        assert!(sampler.poll(start));
        assert!(!sampler.poll(start + Duration::from_millis(100)));
        assert!(sampler.poll(start + Duration::from_millis(600)));
    }

    #[test]
    fn unarmed_never_fires() {
        let start = Instant::now();
        let mut sampler = Sampler::new(Duration::from_millis(500));
        assert!(!sampler.poll(start + Duration::from_secs(60)));
    }

    #[test]
    fn defer_then_rearm() {
        let start = Instant::now();
        let mut sampler = Sampler::new(Duration::from_millis(500));
        sampler.arm(start);
        assert!(sampler.poll(start));

        sampler.defer_fire();
        assert!(!sampler.is_armed());
        assert!(!sampler.poll(start + Duration::from_secs(10)));

        // Resume is immediate, no new allocation or schedule rebuild
        sampler.arm(start + Duration::from_secs(11));
        assert!(sampler.poll(start + Duration::from_secs(11)));
    }
}
