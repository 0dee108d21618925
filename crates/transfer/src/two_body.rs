//! Point masses around a fixed central body, integrated with semi-implicit Euler.

use orrery_core::vector::{self, Vector3};

use crate::TransferError;

/// Unit vector 90° ahead of `position` in the x–y plane.
pub fn prograde_unit(position: &Vector3) -> Option<Vector3> {
    vector::normalize(&[-position[1], position[0], 0.0])
}

/// Inverse-square acceleration toward the origin: `-gm * p / |p|³`.
pub fn gravity_acceleration(position: &Vector3, gm: f64) -> Vector3 {
    let r = vector::norm(position);
    if r == 0.0 {
        return vector::ZERO;
    }
    vector::scale(position, -gm / (r * r * r))
}

/// A body moving ballistically under the central attraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitingBody {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl OrbitingBody {
    /// Place a body at `position` with the prograde circular speed `sqrt(gm / r)`.
    pub fn circular(position: Vector3, gm: f64) -> Result<Self, TransferError> {
        let r = vector::norm(&position);
        let tangent = prograde_unit(&position).ok_or(TransferError::DegenerateRadius(r))?;
        Ok(Self {
            position,
            velocity: vector::scale(&tangent, (gm / r).sqrt()),
        })
    }

    pub fn radius(&self) -> f64 {
        vector::norm(&self.position)
    }

    pub fn speed(&self) -> f64 {
        vector::norm(&self.velocity)
    }

    /// One fixed step: velocity is updated first, then position with the new velocity.
    pub fn step(&mut self, gm: f64, dt: f64) {
        let acceleration = gravity_acceleration(&self.position, gm);
        self.velocity = vector::add(&self.velocity, &vector::scale(&acceleration, dt));
        self.position = vector::add(&self.position, &vector::scale(&self.velocity, dt));
    }

    /// Specific orbital energy `v²/2 - gm/r`, handy for drift checks.
    pub fn specific_energy(&self, gm: f64) -> f64 {
        let v = self.speed();
        0.5 * v * v - gm / self.radius()
    }
}
