//! Tick sources
//!
//! A tick is a millisecond timestamp from a monotonic clock. Time modes hold
//! a clone of the tick source they were created with and read it on demand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond clock.
///
/// Readings never decrease for the lifetime of the process. Clones must
/// observe the same timeline.
pub trait TickSource {
    /// Current tick in milliseconds since the clock's epoch
    fn now(&self) -> u64;
}

/// Host clock, counting from the moment it was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemClock {
    fn now(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Clones share the same reading, so a test can keep one handle and move
/// time forward under a timer that owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    tick: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: u64) -> Self {
        Self {
            tick: Rc::new(Cell::new(start)),
        }
    }

    /// Jump to an absolute tick. Earlier ticks are ignored to keep the
    /// clock monotonic.
    pub fn set(&self, tick: u64) {
        if tick > self.tick.get() {
            self.tick.set(tick);
        }
    }

    /// Move the clock forward by `ms`
    pub fn advance(&self, ms: u64) {
        self.tick.set(self.tick.get().saturating_add(ms));
    }
}

impl TickSource for ManualClock {
    fn now(&self) -> u64 {
        self.tick.get()
    }
}
