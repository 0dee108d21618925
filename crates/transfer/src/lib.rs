//! Legacy two-body transfer sandbox.
//!
//! Unlike the closed-form orbits used everywhere else, this sandbox integrates
//! point masses numerically. The integrator is first order and drifts in
//! energy over long runs; it exists for the spaceship launch demo only.
//! [`Shuttle`] is the scripted alternative: one Bezier hop between bodies.

use thiserror::Error;

pub mod bezier;
pub mod hohmann;
pub mod planner;
pub mod system;
pub mod two_body;

pub use bezier::{BezierTransfer, Shuttle, TravelRequest, cubic_bezier};
pub use hohmann::{HohmannEstimate, LaunchWindow, hohmann, launch_window, phase_angle_deg};
pub use planner::{LaunchRequest, TransferPlanner, TransferState};
pub use system::LegacySystem;
pub use two_body::OrbitingBody;

#[derive(Debug, Error, PartialEq)]
pub enum TransferError {
    #[error("orbital radius must be positive and lie off the z axis (got {0})")]
    DegenerateRadius(f64),
    #[error("gravitational parameter must be positive and finite (got {0})")]
    InvalidGm(f64),
    #[error("integration step must be positive and finite (got {0})")]
    InvalidStep(f64),
    #[error("launch speed must be non-negative and finite (got {0})")]
    InvalidLaunchSpeed(f64),
    #[error("no destination body at index {0}")]
    UnknownDestination(usize),
    #[error("shuttle is parked at body {0}, which has no known position")]
    UnknownOrigin(usize),
}
