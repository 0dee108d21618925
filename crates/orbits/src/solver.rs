//! Closed-form position and spin solvers.
//!
//! Two point functions exist: a flat circle and an inclined ellipse
//! parametrized directly by the orbital angle. The ellipse does not solve
//! Kepler's equation, so bodies move at uniform angular rate around the sun
//! rather than sweeping equal areas.

use std::f64::consts::TAU;

use orrery_config::OrbitModelSetting;
use orrery_core::vector::Vector3;

use crate::elements::OrbitShape;

/// Which point function places a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitModel {
    /// Flat circle at the semi-major axis, `y = 0`.
    Circular,
    /// Inclined, angle-parametrized ellipse.
    Elliptical,
}

impl OrbitModel {
    /// Model for a body: the settings override wins, otherwise the catalog shape decides.
    pub fn select(shape: &OrbitShape, setting: OrbitModelSetting) -> Self {
        match setting {
            OrbitModelSetting::Circular => OrbitModel::Circular,
            OrbitModelSetting::Elliptical => OrbitModel::Elliptical,
            OrbitModelSetting::AsCataloged => match shape {
                OrbitShape::Circular { .. } => OrbitModel::Circular,
                OrbitShape::Elliptical { .. } => OrbitModel::Elliptical,
            },
        }
    }
}

/// Position and spin of a body for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vector3,
    /// Spin about the vertical axis, already sign-adjusted for the renderer.
    pub rotation_y: f64,
    /// Unwrapped orbital angle the position was evaluated at.
    pub orbital_angle: f64,
}

/// `initial_angle + elapsed_days * 2π / orbital_period` (not wrapped).
#[inline]
pub fn orbital_angle(initial_angle: f64, elapsed_days: f64, orbital_period: f64) -> f64 {
    initial_angle + elapsed_days * TAU / orbital_period
}

/// Point on a flat circle of `radius`.
#[inline]
pub fn circular_point(radius: f64, angle: f64) -> Vector3 {
    [radius * angle.cos(), 0.0, radius * angle.sin()]
}

/// Point on an inclined ellipse, with the sun at the focus.
///
/// `r = a(1 - e²) / (1 + e cos θ)`; the orbit plane is tilted about the x axis
/// by `inclination_rad`.
#[inline]
pub fn ellipse_point(
    semi_major_axis: f64,
    eccentricity: f64,
    inclination_rad: f64,
    angle: f64,
) -> Vector3 {
    let r = semi_major_axis * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * angle.cos());
    let (sin_a, cos_a) = angle.sin_cos();
    let (sin_i, cos_i) = inclination_rad.sin_cos();
    [r * cos_a, r * sin_a * sin_i, r * sin_a * cos_i]
}

/// Spin angle about y after `elapsed_days`.
///
/// The angle is negated, so a positive rotation period turns the body with a
/// decreasing angle and a retrograde (negative) period turns it the other way.
#[inline]
pub fn rotation_angle(elapsed_days: f64, rotation_period: f64) -> f64 {
    -(elapsed_days / rotation_period * TAU)
}

/// Sample `point` at `segments + 1` evenly spaced angles over `[0, 2π]`.
///
/// The first and last samples coincide so the polyline closes.
pub fn sample_path<F>(segments: usize, point: F) -> Vec<Vector3>
where
    F: Fn(f64) -> Vector3,
{
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| point(i as f64 / segments as f64 * TAU))
        .collect()
}
