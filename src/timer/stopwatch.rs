//! Stopwatch mode
//!
//! Counts up from zero. While running, elapsed time is derived from a
//! reference tick; while paused it is frozen in `accumulated`.

use crate::clock::TickSource;

#[derive(Debug, Clone)]
pub struct Stopwatch<C: TickSource> {
    clock: C,
    running: bool,
    /// Tick such that `elapsed = now - reference_tick` while running
    reference_tick: u64,
    /// Elapsed time frozen at the last pause
    accumulated: u64,
}

impl<C: TickSource> Stopwatch<C> {
    /// Create a stopped stopwatch reading zero
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running: false,
            reference_tick: 0,
            accumulated: 0,
        }
    }

    /// Start or resume counting. No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.reference_tick = self.clock.now().saturating_sub(self.accumulated);
        self.running = true;
    }

    /// Freeze the elapsed time. No-op when not running.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.accumulated = self.clock.now().saturating_sub(self.reference_tick);
        self.running = false;
    }

    /// Stop and return to zero
    pub fn reset(&mut self) {
        self.accumulated = 0;
        self.running = false;
    }

    /// Elapsed milliseconds
    pub fn elapsed(&self) -> u64 {
        if self.running {
            self.clock.now().saturating_sub(self.reference_tick)
        } else {
            self.accumulated
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
