//! Accumulation of scaled wall-clock time.

use orrery_core::time::{days_to_seconds, seconds_to_days};
use thiserror::Error;

use crate::wall::WallClock;

#[derive(Debug, Error, PartialEq)]
pub enum ClockError {
    #[error("time scale must be positive and finite (got {0})")]
    InvalidScale(f64),
    #[error("time-scale exponent range is empty (min {min}, max {max})")]
    InvalidExponentRange { min: f64, max: f64 },
}

/// Maps wall-clock deltas into accumulated simulation time.
///
/// Accumulated time is kept in days and never decreases. Call [`tick`](Self::tick)
/// exactly once per frame, before any body is evaluated.
#[derive(Debug)]
pub struct TimeController<C: WallClock> {
    clock: C,
    last_frame: f64,
    accumulated_days: f64,
    time_scale: f64,
}

impl<C: WallClock> TimeController<C> {
    /// Starts counting from the clock's current reading. Rejects invalid scales.
    pub fn new(clock: C, time_scale: f64) -> Result<Self, ClockError> {
        check_scale(time_scale)?;
        let last_frame = clock.now_seconds();
        Ok(Self {
            clock,
            last_frame,
            accumulated_days: 0.0,
            time_scale,
        })
    }

    /// Advance by the wall time since the previous tick and return accumulated days.
    pub fn tick(&mut self) -> f64 {
        let now = self.clock.now_seconds();
        let mut delta = now - self.last_frame;
        self.last_frame = now;
        if delta.is_nan() || delta < 0.0 {
            tracing::warn!(delta, "wall clock moved backwards; treating frame as zero-length");
            delta = 0.0;
        }
        self.accumulated_days += seconds_to_days(delta * self.time_scale);
        self.accumulated_days
    }

    /// Replace the scale for future deltas. Time already accumulated is untouched.
    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<(), ClockError> {
        check_scale(time_scale)?;
        tracing::debug!(from = self.time_scale, to = time_scale, "time scale changed");
        self.time_scale = time_scale;
        Ok(())
    }

    /// Wall seconds to simulated seconds multiplier.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Accumulated simulation time in days.
    pub fn accumulated_days(&self) -> f64 {
        self.accumulated_days
    }

    /// Accumulated simulation time in seconds.
    pub fn accumulated_seconds(&self) -> f64 {
        days_to_seconds(self.accumulated_days)
    }

    /// The injected wall clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn check_scale(scale: f64) -> Result<(), ClockError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ClockError::InvalidScale(scale))
    }
}
