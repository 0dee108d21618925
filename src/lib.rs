//! Orbital kinematics and simulation time for a solar-system visualizer.
//!
//! The member crates are re-exported here so binaries and tests can reach
//! everything through one dependency.

pub mod logging;

pub use orrery_clock as clock;
pub use orrery_config as config;
pub use orrery_core as core;
pub use orrery_export as export;
pub use orrery_orbits as orbits;
pub use orrery_picking as picking;
pub use orrery_scene as scene;
pub use orrery_transfer as transfer;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
