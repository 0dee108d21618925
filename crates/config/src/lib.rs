//! Catalog models and loaders for the orrery.
//!
//! Body catalogs are static tables read once at startup. A catalog file (YAML
//! or TOML) holds the sun and the ordered list of bodies; a directory holds
//! one TOML record per body, ordered by file name.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod settings;

pub use settings::{
    OrbitModelSetting, PeriodUnitSetting, PickingSettings, SimulationSettings, TimeScaleSettings,
    TransferSettings, load_settings,
};

/// A whole catalog: the central star plus the ordered bodies orbiting it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub sun: SunConfig,
    pub bodies: Vec<BodyConfig>,
}

/// Central star parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SunConfig {
    #[serde(default)]
    pub texture: Option<String>,
    pub radius: f64,
    pub rotation_period_days: f64,
}

/// One body as it appears in the catalog.
///
/// Exactly one orbit description must be present: `orbit_radius` for a
/// circular orbit, or both `perihelion` and `aphelion` for an ellipse.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub texture: Option<String>,
    pub radius: f64,
    #[serde(default)]
    pub orbit_radius: Option<f64>,
    #[serde(default)]
    pub perihelion: Option<f64>,
    #[serde(default)]
    pub aphelion: Option<f64>,
    pub orbital_period_days: f64,
    pub rotation_period_days: f64,
    #[serde(default)]
    pub orbital_inclination_deg: f64,
    #[serde(default)]
    pub ring: Option<RingConfig>,
    #[serde(default)]
    pub facts: Option<BodyFacts>,
}

/// Ring system drawn around a body (presentation only).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RingConfig {
    pub inner_radius: f64,
    pub outer_radius: f64,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub alpha_map: Option<String>,
}

/// Reference facts shown in the selected-body panel. Not used by the solver.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct BodyFacts {
    /// 10^24 kg.
    pub mass: Option<f64>,
    /// km.
    pub diameter: Option<f64>,
    /// kg/m³.
    pub density: Option<f64>,
    /// m/s².
    pub gravity: Option<f64>,
    /// km/s.
    pub escape_velocity: Option<f64>,
    /// hours.
    pub length_of_day: Option<f64>,
    /// 10^6 km.
    pub distance_from_sun: Option<f64>,
    /// km/s.
    pub orbital_velocity: Option<f64>,
    pub orbital_eccentricity: Option<f64>,
    /// degrees.
    pub obliquity_to_orbit: Option<f64>,
    /// °C.
    pub mean_temperature: Option<f64>,
    pub number_of_moons: Option<u32>,
}

/// Orbit description resolved from the optional catalog fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitConfig {
    Circular { radius: f64 },
    Elliptical { perihelion: f64, aphelion: f64 },
}

impl BodyConfig {
    /// Resolve which orbit description this record carries.
    pub fn orbit(&self) -> Result<OrbitConfig, ConfigError> {
        match (self.orbit_radius, self.perihelion, self.aphelion) {
            (None, Some(perihelion), Some(aphelion)) => Ok(OrbitConfig::Elliptical {
                perihelion,
                aphelion,
            }),
            (Some(radius), None, None) => Ok(OrbitConfig::Circular { radius }),
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                Err(ConfigError::ConflictingOrbit(self.name.clone()))
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                Err(ConfigError::IncompleteApsides(self.name.clone()))
            }
            (None, None, None) => Err(ConfigError::MissingOrbit(self.name.clone())),
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{0}' has no orbit (expected orbit_radius or perihelion/aphelion)")]
    MissingOrbit(String),
    #[error("body '{0}' declares both a circular radius and apsides")]
    ConflictingOrbit(String),
    #[error("body '{0}' needs both perihelion and aphelion")]
    IncompleteApsides(String),
    #[error("catalog contains no bodies")]
    EmptyCatalog,
    #[error("body '{0}' appears more than once in the catalog")]
    DuplicateBody(String),
}

/// Load a full catalog (sun + bodies) from a YAML or TOML file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, ConfigError> {
    let path = path.as_ref();
    let catalog: Catalog = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    check_bodies(&catalog.bodies)?;
    Ok(catalog)
}

/// Load body records from a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path)?;
    check_bodies(&bodies)?;
    Ok(bodies)
}

/// Find a body by name, case-insensitively.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Option<&'a BodyConfig> {
    let upper = name.to_uppercase();
    bodies.iter().find(|b| b.name.to_uppercase() == upper)
}

fn check_bodies(bodies: &[BodyConfig]) -> Result<(), ConfigError> {
    if bodies.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }
    for (i, body) in bodies.iter().enumerate() {
        body.orbit()?;
        if bodies[..i]
            .iter()
            .any(|earlier| earlier.name.eq_ignore_ascii_case(&body.name))
        {
            return Err(ConfigError::DuplicateBody(body.name.clone()));
        }
    }
    Ok(())
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
