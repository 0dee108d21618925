//! Hohmann-style launch windows and transfer estimates in simulation units.

use orrery_core::angle::normalize_degrees;
use orrery_core::vector::{self, Vector3};

use crate::TransferError;

/// Launch geometry for a transfer from the current orbit to a destination orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchWindow {
    /// Semi-major axis of the transfer ellipse, `(r_ship + r_dest) / 2`.
    pub transfer_semi_major_axis: f64,
    /// Transfer angle, `180 * (a / r_dest)^1.5 mod 360`, degrees.
    pub phi_deg: f64,
    /// Lead angle the destination should hold at launch, degrees.
    pub theta_deg: f64,
}

/// Compute the transfer and lead angles between two orbital radii.
pub fn launch_window(
    current_radius: f64,
    destination_radius: f64,
) -> Result<LaunchWindow, TransferError> {
    for r in [current_radius, destination_radius] {
        if !(r.is_finite() && r > 0.0) {
            return Err(TransferError::DegenerateRadius(r));
        }
    }
    let a = 0.5 * (current_radius + destination_radius);
    let phi = (180.0 * (a / destination_radius).powf(1.5)) % 360.0;
    let theta = if phi < 180.0 { 180.0 - phi } else { 540.0 - phi };
    Ok(LaunchWindow {
        transfer_semi_major_axis: a,
        phi_deg: phi,
        theta_deg: theta,
    })
}

/// Angle from `a` to `b` in degrees, `[0, 360)`, counter-clockwise about +z.
pub fn phase_angle_deg(a: &Vector3, b: &Vector3) -> Option<f64> {
    let denom = vector::norm(a) * vector::norm(b);
    if denom == 0.0 {
        return None;
    }
    let cos = (vector::dot(a, b) / denom).clamp(-1.0, 1.0);
    let theta = cos.acos().to_degrees();
    let cross = vector::cross(a, b);
    Some(if cross[2] < 0.0 {
        normalize_degrees(360.0 - theta)
    } else {
        theta
    })
}

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannEstimate {
    pub dv1: f64,      // signed: negative for inward (retro) burn
    pub dv2: f64,      // signed: negative for retro capture when arriving inward
    pub dv_total: f64, // |dv1| + |dv2|
    pub time_of_flight: f64,
}

/// Classical Hohmann transfer between two circular coplanar orbits around `gm`.
pub fn hohmann(r1: f64, r2: f64, gm: f64) -> Result<HohmannEstimate, TransferError> {
    for r in [r1, r2] {
        if !(r.is_finite() && r > 0.0) {
            return Err(TransferError::DegenerateRadius(r));
        }
    }
    if !(gm.is_finite() && gm > 0.0) {
        return Err(TransferError::InvalidGm(gm));
    }

    let v1 = (gm / r1).sqrt();
    let v2 = (gm / r2).sqrt();
    let a_t = 0.5 * (r1 + r2);
    let tof = std::f64::consts::PI * (a_t.powi(3) / gm).sqrt();

    // Transfer periapsis speed (at r1) and apoapsis speed (at r2)
    let v_t1 = (gm * (2.0 / r1 - 1.0 / a_t)).sqrt();
    let v_t2 = (gm * (2.0 / r2 - 1.0 / a_t)).sqrt();

    let dv1 = v_t1 - v1;
    let dv2 = v2 - v_t2;

    Ok(HohmannEstimate {
        dv1,
        dv2,
        dv_total: dv1.abs() + dv2.abs(),
        time_of_flight: tof,
    })
}
