//! In-memory renderer used by the command-line tools and tests.

use orrery_core::vector::{self, Vector3};
use orrery_picking::{GeometricRayCaster, PickCandidate, Ray, RayCaster, RayHit};

use crate::render::{BodyHandle, RenderBackend};

/// Last transform pushed for one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRecord {
    pub name: String,
    pub radius: f64,
    pub position: Vector3,
    pub rotation_y: f64,
    pub orbit_path: Vec<Vector3>,
    pub orbit_visible: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    meshes: Vec<MeshRecord>,
    caster: GeometricRayCaster,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self, handle: BodyHandle) -> Option<&MeshRecord> {
        self.meshes.get(handle.0 as usize)
    }

    pub fn meshes(&self) -> &[MeshRecord] {
        &self.meshes
    }

    fn mesh_mut(&mut self, handle: BodyHandle) -> Option<&mut MeshRecord> {
        let mesh = self.meshes.get_mut(handle.0 as usize);
        if mesh.is_none() {
            tracing::warn!(handle = handle.0, "update for unknown mesh ignored");
        }
        mesh
    }
}

impl RayCaster for HeadlessRenderer {
    fn intersect_ray(&self, ray: &Ray, candidates: &[PickCandidate<'_>]) -> Vec<RayHit> {
        self.caster.intersect_ray(ray, candidates)
    }
}

impl RenderBackend for HeadlessRenderer {
    fn create_body(&mut self, name: &str, radius: f64) -> BodyHandle {
        let handle = BodyHandle(self.meshes.len() as u32);
        self.meshes.push(MeshRecord {
            name: name.to_string(),
            radius,
            position: vector::ZERO,
            rotation_y: 0.0,
            orbit_path: Vec::new(),
            orbit_visible: false,
        });
        handle
    }

    fn set_position(&mut self, handle: BodyHandle, position: Vector3) {
        if let Some(mesh) = self.mesh_mut(handle) {
            mesh.position = position;
        }
    }

    fn set_rotation_y(&mut self, handle: BodyHandle, angle: f64) {
        if let Some(mesh) = self.mesh_mut(handle) {
            mesh.rotation_y = angle;
        }
    }

    fn set_orbit_path(&mut self, handle: BodyHandle, path: &[Vector3]) {
        if let Some(mesh) = self.mesh_mut(handle) {
            mesh.orbit_path = path.to_vec();
        }
    }

    fn set_orbit_visible(&mut self, handle: BodyHandle, visible: bool) {
        if let Some(mesh) = self.mesh_mut(handle) {
            mesh.orbit_visible = visible;
        }
    }
}
