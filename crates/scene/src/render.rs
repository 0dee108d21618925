//! Render collaborator contract.

use glam::DVec3;
use orrery_core::vector::Vector3;
use orrery_picking::{PerspectiveCamera, RayCaster, ScreenPoint, Viewport};

/// Opaque mesh identifier handed out by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

/// What the simulation needs from a scene graph.
pub trait RenderBackend: RayCaster {
    /// Create a sphere mesh for a body and return its handle.
    fn create_body(&mut self, name: &str, radius: f64) -> BodyHandle;

    fn set_position(&mut self, handle: BodyHandle, position: Vector3);

    fn set_rotation_y(&mut self, handle: BodyHandle, angle: f64);

    /// Replace the orbit line drawn for a body.
    fn set_orbit_path(&mut self, handle: BodyHandle, path: &[Vector3]);

    fn set_orbit_visible(&mut self, handle: BodyHandle, visible: bool);

    /// Project a world point to canvas pixels, `None` if it cannot be seen.
    fn project_to_screen(
        &self,
        world: Vector3,
        camera: &PerspectiveCamera,
        viewport: Viewport,
    ) -> Option<ScreenPoint> {
        camera.project(DVec3::from_array(world), viewport)
    }
}
