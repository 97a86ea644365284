//! Countdown mode
//!
//! Counts down from a fixed duration toward zero. Expiry is reported
//! through `poll_expiry`, which latches so the event fires once per run.

use crate::clock::TickSource;

#[derive(Debug, Clone)]
pub struct Countdown<C: TickSource> {
    clock: C,
    duration_ms: u64,
    running: bool,
    /// Target expiry tick while running
    reference_tick: u64,
    /// Remaining time while not running
    frozen_remaining: u64,
    expired: bool,
}

impl<C: TickSource> Countdown<C> {
    /// Create a stopped countdown holding the full `duration_ms`
    pub fn new(clock: C, duration_ms: u64) -> Self {
        Self {
            clock,
            duration_ms,
            running: false,
            reference_tick: 0,
            frozen_remaining: duration_ms,
            expired: false,
        }
    }

    /// Start or resume. No-op when running or already expired.
    pub fn start(&mut self) {
        if self.running || self.expired {
            return;
        }
        self.reference_tick = self.clock.now().saturating_add(self.frozen_remaining);
        self.running = true;
    }

    /// Freeze the remaining time.
    ///
    /// A countdown that has already run out stays running so the pending
    /// expiry is still reported by the next poll.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        let remaining = self.reference_tick.saturating_sub(self.clock.now());
        if remaining == 0 {
            return;
        }
        self.frozen_remaining = remaining;
        self.running = false;
    }

    /// Stop and restore the full duration
    pub fn reset(&mut self) {
        self.running = false;
        self.expired = false;
        self.frozen_remaining = self.duration_ms;
    }

    /// Remaining milliseconds, clamped at zero
    pub fn remaining(&self) -> u64 {
        if self.expired {
            0
        } else if self.running {
            self.reference_tick.saturating_sub(self.clock.now())
        } else {
            self.frozen_remaining
        }
    }

    /// Returns true the first time a running countdown is seen at zero.
    ///
    /// The countdown stops and latches as expired; later polls return false
    /// until `reset`.
    pub fn poll_expiry(&mut self) -> bool {
        if !self.running || self.remaining() > 0 {
            return false;
        }
        self.running = false;
        self.expired = true;
        self.frozen_remaining = 0;
        true
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_full_duration_before_start() {
        let clock = ManualClock::new(0);
        let cd = Countdown::new(clock.clone(), 5000);
        clock.advance(10_000);
        assert_eq!(cd.remaining(), 5000);
        assert!(!cd.is_running());
    }

    #[test]
    fn test_remaining_strictly_decreases_until_expiry() {
        let clock = ManualClock::new(0);
        let mut cd = Countdown::new(clock.clone(), 1000);
        cd.start();

        let mut last = cd.remaining();
        assert_eq!(last, 1000);
        let mut fired = 0;
        while !cd.is_expired() {
            clock.advance(33);
            let now = cd.remaining();
            if now > 0 {
                assert!(now < last);
            }
            last = now;
            if cd.poll_expiry() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(cd.remaining(), 0);
    }

    #[test]
    fn test_expiry_fires_once() {
        let clock = ManualClock::new(0);
        let mut cd = Countdown::new(clock.clone(), 5000);
        cd.start();

        clock.set(4999);
        assert!(!cd.poll_expiry());
        clock.set(5000);
        assert!(cd.poll_expiry());
        assert!(!cd.poll_expiry());
        clock.set(8000);
        assert!(!cd.poll_expiry());
        assert!(!cd.is_running());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let clock = ManualClock::new(0);
        let mut cd = Countdown::new(clock.clone(), 3000);
        cd.start();
        clock.advance(1000);
        cd.start();
        assert_eq!(cd.remaining(), 2000);
    }

    #[test]
    fn test_pause_freezes_remaining() {
        let clock = ManualClock::new(0);
        let mut cd = Countdown::new(clock.clone(), 3000);
        cd.start();
        clock.advance(1200);
        cd.pause();
        clock.advance(60_000);
        assert_eq!(cd.remaining(), 1800);
        assert!(!cd.poll_expiry());

        cd.start();
        clock.advance(800);
        assert_eq!(cd.remaining(), 1000);
        assert_eq!(cd.duration_ms(), 3000);
    }

    #[test]
    fn test_pause_after_running_out_keeps_expiry_pending() {
        let clock = ManualClock::new(0);
        let mut cd = Countdown::new(clock.clone(), 100);
        cd.start();
        clock.advance(150);
        cd.pause();
        assert!(cd.is_running());
        assert!(cd.poll_expiry());
    }

    #[test]
    fn test_reset_rearms_expiry() {
        let clock = ManualClock::new(0);
        let mut cd = Countdown::new(clock.clone(), 100);
        cd.start();
        clock.advance(100);
        assert!(cd.poll_expiry());

        // Expired countdowns ignore start until reset
        cd.start();
        assert!(!cd.is_running());

        cd.reset();
        cd.reset();
        assert_eq!(cd.remaining(), 100);
        assert!(!cd.is_expired());

        cd.start();
        clock.advance(100);
        assert!(cd.poll_expiry());
    }

    #[test]
    fn test_zero_duration_expires_on_first_poll() {
        let clock = ManualClock::new(42);
        let mut cd = Countdown::new(clock.clone(), 0);
        assert!(!cd.poll_expiry());
        cd.start();
        assert!(cd.poll_expiry());
    }
}
