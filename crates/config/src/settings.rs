//! Simulation settings read from TOML. Every field has a default, so an empty
//! file (or a file that only overrides one section) is valid.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Top-level simulation settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    /// Epoch at which every body's phase angle is zero.
    pub reference_epoch: DateTime<Utc>,
    /// Calendar date shown at simulation start. `None` means "now".
    pub start_date: Option<DateTime<Utc>>,
    /// Unit used when measuring the epoch offset against orbital periods.
    pub period_unit: PeriodUnitSetting,
    pub orbit_model: OrbitModelSetting,
    /// Number of segments in the sampled orbit polyline.
    pub orbit_path_segments: usize,
    pub time_scale: TimeScaleSettings,
    pub picking: PickingSettings,
    pub transfer: TransferSettings,
}

/// Unit of the epoch offset fed into the phase-angle calculation.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnitSetting {
    #[default]
    Days,
    Years,
}

/// Which position model the solver uses.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrbitModelSetting {
    /// Use whatever the catalog declares per body.
    #[default]
    AsCataloged,
    /// Force circular orbits at each body's semi-major axis.
    Circular,
    /// Use the inclined ellipse for every body (circular records become e = 0 ellipses).
    Elliptical,
}

/// Exponential time-scale control: scale = 10^exponent.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeScaleSettings {
    pub initial_exponent: f64,
    pub min_exponent: f64,
    pub max_exponent: f64,
    pub step: f64,
}

impl Default for TimeScaleSettings {
    fn default() -> Self {
        Self {
            initial_exponent: 5.0,
            min_exponent: 0.0,
            max_exponent: 7.0,
            step: 0.25,
        }
    }
}

/// Hit-volume sizing and click detection.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PickingSettings {
    /// Radius of the uniform sphere hitbox around every body.
    pub body_hit_radius: f64,
    /// Orbit tube radius at zero camera distance.
    pub orbit_tube_base: f64,
    /// Additional orbit tube radius per unit of camera distance.
    pub orbit_tube_distance_factor: f64,
    /// Maximum press duration (and drag window) for a click, in milliseconds.
    pub click_threshold_ms: f64,
}

impl Default for PickingSettings {
    fn default() -> Self {
        Self {
            body_hit_radius: 10.0,
            orbit_tube_base: 1.0,
            orbit_tube_distance_factor: 0.01,
            click_threshold_ms: 100.0,
        }
    }
}

/// Constants of the legacy two-body transfer sandbox.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TransferSettings {
    pub gm: f64,
    pub dt: f64,
    pub launch_speed: f64,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            gm: 1000.0,
            dt: 0.01,
            launch_speed: 5.0,
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            reference_epoch: j2000(),
            start_date: None,
            period_unit: PeriodUnitSetting::Days,
            orbit_model: OrbitModelSetting::AsCataloged,
            orbit_path_segments: 360,
            time_scale: TimeScaleSettings::default(),
            picking: PickingSettings::default(),
            transfer: TransferSettings::default(),
        }
    }
}

/// 2000-01-01T12:00:00Z.
pub fn j2000() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Load settings from a TOML file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<SimulationSettings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
