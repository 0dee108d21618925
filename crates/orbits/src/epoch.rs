//! Phase anchoring: where a body sits on its orbit at simulation start.

use std::f64::consts::TAU;

use chrono::{DateTime, Utc};
use orrery_config::PeriodUnitSetting;
use orrery_core::angle::normalize_radians;
use orrery_core::time::{days_to_years, milliseconds_to_days};

pub use orrery_config::settings::j2000;

/// Unit in which the epoch offset and the orbital period are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodUnit {
    #[default]
    Days,
    Years,
}

impl PeriodUnit {
    /// Express a day count in this unit.
    pub fn convert_days(self, days: f64) -> f64 {
        match self {
            PeriodUnit::Days => days,
            PeriodUnit::Years => days_to_years(days),
        }
    }
}

impl From<PeriodUnitSetting> for PeriodUnit {
    fn from(value: PeriodUnitSetting) -> Self {
        match value {
            PeriodUnitSetting::Days => PeriodUnit::Days,
            PeriodUnitSetting::Years => PeriodUnit::Years,
        }
    }
}

/// Signed offset `initial - reference`, in `unit`.
pub fn epoch_offset(initial: DateTime<Utc>, reference: DateTime<Utc>, unit: PeriodUnit) -> f64 {
    let millis = initial.signed_duration_since(reference).num_milliseconds() as f64;
    unit.convert_days(milliseconds_to_days(millis))
}

/// Phase angle for an offset already expressed in the period's unit, in `[0, 2π)`.
pub fn initial_angle_from_offset(offset: f64, orbital_period: f64) -> f64 {
    normalize_radians(offset / orbital_period * TAU)
}

/// Phase angle of a body at `initial`, measured from `reference`, in `[0, 2π)`.
///
/// `orbital_period` must be expressed in `unit`. Dates before the reference
/// epoch produce a negative offset that still normalizes into range.
pub fn initial_angle(
    initial: DateTime<Utc>,
    reference: DateTime<Utc>,
    orbital_period: f64,
    unit: PeriodUnit,
) -> f64 {
    initial_angle_from_offset(epoch_offset(initial, reference, unit), orbital_period)
}
