//! Rays and the two primitive intersection tests used for picking.

use glam::DVec3;

/// Half-line `origin + t * direction`, `t >= 0`, with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// `None` if `direction` has zero (or non-finite) length.
    pub fn new(origin: DVec3, direction: DVec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first sphere surface crossing.
    ///
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: DVec3, radius: f64) -> Option<f64> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_near = -b - sqrt_disc;
        let t_far = -b + sqrt_disc;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            Some(t_far)
        } else {
            None
        }
    }

    /// Closest approach between the ray and segment `a`–`b`.
    ///
    /// Returns `(t, distance)` where `t` is the ray parameter of the closest point.
    pub fn closest_approach_to_segment(&self, a: DVec3, b: DVec3) -> (f64, f64) {
        const EPS: f64 = 1e-12;
        let d1 = self.direction;
        let d2 = b - a;
        let r = self.origin - a;
        let e = d2.dot(d2);
        let f = d2.dot(r);
        let c = d1.dot(r);

        let (t, s) = if e <= EPS {
            ((-c).max(0.0), 0.0)
        } else {
            let bb = d1.dot(d2);
            let denom = e - bb * bb;
            let mut t = if denom.abs() > EPS {
                ((bb * f - c * e) / denom).max(0.0)
            } else {
                0.0
            };
            let mut s = (bb * t + f) / e;
            if s < 0.0 {
                s = 0.0;
                t = (-c).max(0.0);
            } else if s > 1.0 {
                s = 1.0;
                t = (bb - c).max(0.0);
            }
            (t, s)
        };

        let on_ray = self.at(t);
        let on_segment = a + d2 * s;
        (t, on_ray.distance(on_segment))
    }

    /// Nearest distance along the ray at which it passes within `radius` of the polyline.
    ///
    /// The tube is treated as a chain of capsules and the reported distance is
    /// the ray parameter at closest approach to the winning segment.
    pub fn intersect_tube<I>(&self, path: I, radius: f64) -> Option<f64>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut points = path.into_iter();
        let mut prev = points.next()?;
        let mut best: Option<f64> = None;
        for point in points {
            let (t, distance) = self.closest_approach_to_segment(prev, point);
            if distance <= radius && best.is_none_or(|current| t < current) {
                best = Some(t);
            }
            prev = point;
        }
        best
    }
}
