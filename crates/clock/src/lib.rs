//! Simulation clock.
//!
//! [`TimeController`] turns wall-clock deltas into accumulated simulation days
//! through a user-adjustable scale. The wall clock is injected so runs are
//! reproducible: [`MonotonicClock`] in interactive use, [`ManualClock`] in
//! tests and headless rendering.

pub mod calendar;
pub mod controller;
pub mod scale;
pub mod wall;

pub use calendar::SimulationCalendar;
pub use controller::{ClockError, TimeController};
pub use scale::TimeScale;
pub use wall::{ManualClock, MonotonicClock, WallClock};
