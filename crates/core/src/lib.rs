//! Core units, constants, and shared primitives for the orrery workspace.
//!
//! Simulation time is kept in days everywhere inside the workspace. Anything
//! crossing a boundary (wall clock seconds, calendar milliseconds, legacy
//! year-based formulas) goes through the named conversions in [`time`].

/// Physical and calendar constants.
pub mod constants {
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Milliseconds per day.
    pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;
    /// Days per Julian year.
    pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
}

/// Named conversions between the internal day unit and external units.
pub mod time {
    use super::constants::{DAYS_PER_JULIAN_YEAR, MILLISECONDS_PER_DAY, SECONDS_PER_DAY};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert milliseconds to days.
    #[inline]
    pub fn milliseconds_to_days(millis: f64) -> f64 {
        millis / MILLISECONDS_PER_DAY
    }

    /// Convert days to milliseconds.
    #[inline]
    pub fn days_to_milliseconds(days: f64) -> f64 {
        days * MILLISECONDS_PER_DAY
    }

    /// Convert days to Julian years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_JULIAN_YEAR
    }

    /// Convert Julian years to days.
    #[inline]
    pub fn years_to_days(years: f64) -> f64 {
        years * DAYS_PER_JULIAN_YEAR
    }
}

/// Angle helpers.
pub mod angle {
    use std::f64::consts::TAU;

    /// Wrap an angle in radians into `[0, 2π)`.
    ///
    /// `%` keeps the sign of the dividend, so negative inputs would stay
    /// negative. The Euclidean remainder is used instead, and the rounding
    /// case where a tiny negative input lands exactly on `2π` folds to zero.
    #[inline]
    pub fn normalize_radians(angle: f64) -> f64 {
        let wrapped = angle.rem_euclid(TAU);
        if wrapped >= TAU { 0.0 } else { wrapped }
    }

    /// Wrap an angle in degrees into `[0, 360)`.
    #[inline]
    pub fn normalize_degrees(angle: f64) -> f64 {
        let wrapped = angle.rem_euclid(360.0);
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// 3D vector in scene units (or scene units per time step for velocities).
    pub type Vector3 = [f64; 3];

    /// Zero vector.
    pub const ZERO: Vector3 = [0.0, 0.0, 0.0];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Cross product `a × b`.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Unit vector in the direction of `v`, or `None` for a zero-length input.
    #[inline]
    pub fn normalize(v: &Vector3) -> Option<Vector3> {
        let n = norm(v);
        if n > 0.0 && n.is_finite() {
            Some(scale(v, 1.0 / n))
        } else {
            None
        }
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
        norm(&sub(a, b))
    }
}
