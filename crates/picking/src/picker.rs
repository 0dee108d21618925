//! Hit volumes per body and nearest-hit selection.

use std::cmp::Ordering;

use glam::DVec3;
use orrery_config::PickingSettings;
use orrery_core::vector::Vector3;

use crate::camera::{PerspectiveCamera, Viewport};
use crate::ray::Ray;

/// Which volume of a candidate the ray hit.
///
/// Declaration order is the tie-break when two hits are equally near: a
/// body's sphere wins over an orbit tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Surface {
    Body,
    OrbitPath,
}

/// The pickable volumes of one body for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct PickCandidate<'a> {
    pub center: DVec3,
    /// Radius of the invisible hitbox sphere centred on the body.
    pub hit_radius: f64,
    /// Orbit polyline, or `None` when orbit lines are hidden.
    pub orbit_path: Option<&'a [Vector3]>,
    pub tube_radius: f64,
}

/// One ray intersection. `candidate` indexes the slice passed to the caster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub candidate: usize,
    pub surface: Surface,
    /// Ray parameter of the hit. For a body this is where the ray enters the
    /// sphere; for an orbit tube it is the closest approach to the polyline,
    /// not the tube surface.
    pub distance: f64,
}

/// Order hits nearest first; ties go to the earlier candidate, then to the body sphere.
pub fn sort_hits(hits: &mut [RayHit]) {
    hits.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then(a.candidate.cmp(&b.candidate))
            .then(a.surface.cmp(&b.surface))
    });
}

/// Intersects a ray with candidate volumes.
///
/// Renderers with their own scene graph implement this; the picker only
/// relies on the returned hits, not on how they were found.
pub trait RayCaster {
    fn intersect_ray(&self, ray: &Ray, candidates: &[PickCandidate<'_>]) -> Vec<RayHit>;
}

/// Analytic sphere and capsule-chain intersection.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricRayCaster;

impl RayCaster for GeometricRayCaster {
    fn intersect_ray(&self, ray: &Ray, candidates: &[PickCandidate<'_>]) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            if let Some(distance) = ray.intersect_sphere(candidate.center, candidate.hit_radius) {
                hits.push(RayHit {
                    candidate: index,
                    surface: Surface::Body,
                    distance,
                });
            }
            if let Some(path) = candidate.orbit_path {
                let points = path.iter().map(|p| DVec3::from_array(*p));
                if let Some(distance) = ray.intersect_tube(points, candidate.tube_radius) {
                    hits.push(RayHit {
                        candidate: index,
                        surface: Surface::OrbitPath,
                        distance,
                    });
                }
            }
        }
        sort_hits(&mut hits);
        hits
    }
}

/// Turns a pointer position into the nearest hit body.
#[derive(Debug, Clone)]
pub struct PointerPicker {
    settings: PickingSettings,
}

impl PointerPicker {
    pub fn new(settings: PickingSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PickingSettings {
        &self.settings
    }

    /// Tube radius grows with camera distance so distant orbits stay clickable.
    pub fn tube_radius(&self, camera: &PerspectiveCamera, body_position: DVec3) -> f64 {
        self.settings.orbit_tube_base
            + self.settings.orbit_tube_distance_factor * camera.distance_to(body_position)
    }

    /// Build the volumes for a body at `position`.
    pub fn candidate<'a>(
        &self,
        camera: &PerspectiveCamera,
        position: Vector3,
        orbit_path: Option<&'a [Vector3]>,
    ) -> PickCandidate<'a> {
        let center = DVec3::from_array(position);
        PickCandidate {
            center,
            hit_radius: self.settings.body_hit_radius,
            orbit_path,
            tube_radius: self.tube_radius(camera, center),
        }
    }

    /// Nearest hit under the pixel `(x, y)`, if any.
    pub fn pick<R>(
        &self,
        x: f64,
        y: f64,
        viewport: Viewport,
        camera: &PerspectiveCamera,
        candidates: &[PickCandidate<'_>],
        caster: &R,
    ) -> Option<RayHit>
    where
        R: RayCaster + ?Sized,
    {
        let ray = camera.ray_through_pixel(x, y, viewport)?;
        let mut hits = caster.intersect_ray(&ray, candidates);
        sort_hits(&mut hits);
        let nearest = hits.into_iter().next();
        if let Some(hit) = nearest {
            tracing::trace!(
                candidate = hit.candidate,
                surface = ?hit.surface,
                distance = hit.distance,
                "pointer hit"
            );
        }
        nearest
    }
}
