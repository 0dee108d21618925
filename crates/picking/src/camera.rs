//! Perspective camera, NDC conversion and world-to-screen projection.

use glam::{DMat4, DVec2, DVec3, DVec4};

use crate::ray::Ray;

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Pixel position plus NDC depth of a projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Pixel coordinates (origin top-left) to normalized device coordinates (y up).
pub fn screen_to_ndc(x: f64, y: f64, viewport: Viewport) -> DVec2 {
    DVec2::new(
        x / viewport.width * 2.0 - 1.0,
        -(y / viewport.height) * 2.0 + 1.0,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: DVec3,
    pub target: DVec3,
    pub up: DVec3,
    /// Vertical field of view, degrees.
    pub fov_y_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl PerspectiveCamera {
    /// Camera looking at `target` with a 50° field of view and a deep far plane.
    pub fn looking_at(position: DVec3, target: DVec3, aspect: f64) -> Self {
        Self {
            position,
            target,
            up: DVec3::Y,
            fov_y_deg: 50.0,
            aspect,
            near: 0.1,
            far: 50_000.0,
        }
    }

    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, self.up)
    }

    /// OpenGL-style projection (clip z in `[-1, 1]`).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the camera through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: DVec2) -> Option<Ray> {
        let inverse = self.view_projection().inverse();
        let through = inverse.project_point3(DVec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.position, through - self.position)
    }

    /// Ray from the camera through a pixel.
    pub fn ray_through_pixel(&self, x: f64, y: f64, viewport: Viewport) -> Option<Ray> {
        self.ray_through_ndc(screen_to_ndc(x, y, viewport))
    }

    /// Project a world point to pixels. `None` when the point is behind the camera
    /// or past the far plane.
    pub fn project(&self, world: DVec3, viewport: Viewport) -> Option<ScreenPoint> {
        let clip = self.view_projection() * DVec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if ndc.z > 1.0 {
            return None;
        }
        Some(ScreenPoint {
            x: (ndc.x * 0.5 + 0.5) * viewport.width,
            y: (-ndc.y * 0.5 + 0.5) * viewport.height,
            depth: ndc.z,
        })
    }

    pub fn distance_to(&self, point: DVec3) -> f64 {
        self.position.distance(point)
    }
}
