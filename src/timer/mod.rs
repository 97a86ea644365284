//! Time modes
//!
//! Elapsed-time bookkeeping for the two timing modes. Both variants share
//! the run/pause/reset contract and differ in direction: the stopwatch counts
//! up without bound, the countdown counts down and expires once.

pub mod countdown;
pub mod stopwatch;

pub use countdown::Countdown;
pub use stopwatch::Stopwatch;

use crate::clock::TickSource;
use std::fmt;

/// Which timing mode a screen runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Counts up from zero
    Stopwatch,
    /// Counts down from a fixed duration
    Countdown,
}

impl ModeKind {
    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            ModeKind::Stopwatch => "Stopwatch",
            ModeKind::Countdown => "Countdown",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A running instance of one of the timing modes
#[derive(Debug, Clone)]
pub enum TimeMode<C: TickSource> {
    Stopwatch(Stopwatch<C>),
    Countdown(Countdown<C>),
}

impl<C: TickSource> TimeMode<C> {
    pub fn kind(&self) -> ModeKind {
        match self {
            TimeMode::Stopwatch(_) => ModeKind::Stopwatch,
            TimeMode::Countdown(_) => ModeKind::Countdown,
        }
    }

    pub fn start(&mut self) {
        match self {
            TimeMode::Stopwatch(sw) => sw.start(),
            TimeMode::Countdown(cd) => cd.start(),
        }
    }

    pub fn pause(&mut self) {
        match self {
            TimeMode::Stopwatch(sw) => sw.pause(),
            TimeMode::Countdown(cd) => cd.pause(),
        }
    }

    /// Start when stopped, pause when running
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        match self {
            TimeMode::Stopwatch(sw) => sw.reset(),
            TimeMode::Countdown(cd) => cd.reset(),
        }
    }

    pub fn is_running(&self) -> bool {
        match self {
            TimeMode::Stopwatch(sw) => sw.is_running(),
            TimeMode::Countdown(cd) => cd.is_running(),
        }
    }

    /// Milliseconds to show: elapsed for a stopwatch, remaining for a countdown
    pub fn display_ms(&self) -> u64 {
        match self {
            TimeMode::Stopwatch(sw) => sw.elapsed(),
            TimeMode::Countdown(cd) => cd.remaining(),
        }
    }

    /// Report countdown expiry. Always false for a stopwatch.
    pub fn poll_expiry(&mut self) -> bool {
        match self {
            TimeMode::Stopwatch(_) => false,
            TimeMode::Countdown(cd) => cd.poll_expiry(),
        }
    }

    pub fn as_countdown(&self) -> Option<&Countdown<C>> {
        match self {
            TimeMode::Countdown(cd) => Some(cd),
            TimeMode::Stopwatch(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_toggle_drives_start_and_pause() {
        let clock = ManualClock::new(0);
        let mut mode = TimeMode::Stopwatch(Stopwatch::new(clock.clone()));

        mode.toggle();
        assert!(mode.is_running());
        clock.advance(250);
        mode.toggle();
        assert!(!mode.is_running());
        clock.advance(1000);
        assert_eq!(mode.display_ms(), 250);
    }

    #[test]
    fn test_display_ms_follows_direction() {
        let clock = ManualClock::new(0);
        let mut up = TimeMode::Stopwatch(Stopwatch::new(clock.clone()));
        let mut down = TimeMode::Countdown(Countdown::new(clock.clone(), 1000));
        up.start();
        down.start();
        clock.advance(300);
        assert_eq!(up.display_ms(), 300);
        assert_eq!(down.display_ms(), 700);
    }

    #[test]
    fn test_stopwatch_never_expires() {
        let clock = ManualClock::new(0);
        let mut mode = TimeMode::Stopwatch(Stopwatch::new(clock.clone()));
        mode.start();
        clock.advance(u32::MAX as u64);
        assert!(!mode.poll_expiry());
        assert_eq!(mode.kind(), ModeKind::Stopwatch);
        assert!(mode.as_countdown().is_none());
    }
}
