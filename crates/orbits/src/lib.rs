//! Orbital kinematics: validated elements, start-phase anchoring and the
//! closed-form solvers that turn simulation time into positions and spins.

pub mod body;
pub mod elements;
pub mod epoch;
pub mod solver;

pub use body::{Body, Spin};
pub use elements::{ElementsError, OrbitShape, OrbitalElements};
pub use epoch::{PeriodUnit, epoch_offset, initial_angle, initial_angle_from_offset, j2000};
pub use solver::{BodyState, OrbitModel};
