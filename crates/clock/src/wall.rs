//! Wall-clock sources.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of real elapsed time, in seconds since an arbitrary origin.
pub trait WallClock {
    fn now_seconds(&self) -> f64;
}

/// Real monotonic time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for MonotonicClock {
    fn now_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock whose first reading is `seconds`.
    pub fn starting_at(seconds: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(seconds)),
        }
    }

    /// Move every handle forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    /// Jump every handle to `seconds`, backwards included.
    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl WallClock for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.now.get()
    }
}
