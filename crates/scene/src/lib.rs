//! The simulation context: one clock, one set of bodies, one renderer.
//!
//! Rendering is a collaborator behind [`RenderBackend`]. The core only pushes
//! transforms and orbit polylines to it and asks it to intersect rays.

pub mod headless;
pub mod render;
pub mod simulation;

pub use headless::{HeadlessRenderer, MeshRecord};
pub use render::{BodyHandle, RenderBackend};
pub use simulation::{BodyFrame, BodyId, BodyInfo, FrameSnapshot, Simulation, SimulationError};
