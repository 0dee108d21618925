//! Per-body orbital constants and their validation.

use orrery_config::{BodyConfig, ConfigError, OrbitConfig};
use thiserror::Error;

/// Geometry of an orbit, in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitShape {
    Circular { radius: f64 },
    Elliptical { perihelion: f64, aphelion: f64 },
}

impl OrbitShape {
    /// `(perihelion + aphelion) / 2`, or the radius of a circular orbit.
    pub fn semi_major_axis(&self) -> f64 {
        match *self {
            OrbitShape::Circular { radius } => radius,
            OrbitShape::Elliptical {
                perihelion,
                aphelion,
            } => 0.5 * (perihelion + aphelion),
        }
    }

    /// `(aphelion - perihelion) / (aphelion + perihelion)`; zero for circles.
    pub fn eccentricity(&self) -> f64 {
        match *self {
            OrbitShape::Circular { .. } => 0.0,
            OrbitShape::Elliptical {
                perihelion,
                aphelion,
            } => (aphelion - perihelion) / (aphelion + perihelion),
        }
    }
}

impl From<OrbitConfig> for OrbitShape {
    fn from(value: OrbitConfig) -> Self {
        match value {
            OrbitConfig::Circular { radius } => OrbitShape::Circular { radius },
            OrbitConfig::Elliptical {
                perihelion,
                aphelion,
            } => OrbitShape::Elliptical {
                perihelion,
                aphelion,
            },
        }
    }
}

/// Rejections raised while building [`OrbitalElements`].
#[derive(Debug, Error)]
pub enum ElementsError {
    #[error("body '{name}': orbital period must be positive and finite (got {value})")]
    OrbitalPeriod { name: String, value: f64 },
    #[error("body '{name}': rotation period must be non-zero and finite (got {value})")]
    RotationPeriod { name: String, value: f64 },
    #[error("body '{name}': radius must be positive and finite (got {value})")]
    Radius { name: String, value: f64 },
    #[error("body '{name}': orbit radius must be positive and finite (got {value})")]
    OrbitRadius { name: String, value: f64 },
    #[error(
        "body '{name}': apsides must satisfy aphelion >= perihelion > 0 (got perihelion {perihelion}, aphelion {aphelion})"
    )]
    Apsides {
        name: String,
        perihelion: f64,
        aphelion: f64,
    },
    #[error("body '{name}': eccentricity must lie in [0, 1) (got {value})")]
    Eccentricity { name: String, value: f64 },
    #[error("body '{name}': inclination must be finite (got {value})")]
    Inclination { name: String, value: f64 },
    #[error(transparent)]
    Catalog(#[from] ConfigError),
}

/// Immutable orbital constants of one body.
///
/// Periods are in days. A negative rotation period marks retrograde spin.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    name: String,
    radius: f64,
    shape: OrbitShape,
    orbital_period: f64,
    rotation_period: f64,
    inclination_deg: f64,
}

impl OrbitalElements {
    /// Validate and build a set of elements.
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        shape: OrbitShape,
        orbital_period: f64,
        rotation_period: f64,
        inclination_deg: f64,
    ) -> Result<Self, ElementsError> {
        let name = name.into();

        if !(orbital_period.is_finite() && orbital_period > 0.0) {
            return Err(ElementsError::OrbitalPeriod {
                name,
                value: orbital_period,
            });
        }
        if !rotation_period.is_finite() || rotation_period == 0.0 {
            return Err(ElementsError::RotationPeriod {
                name,
                value: rotation_period,
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ElementsError::Radius {
                name,
                value: radius,
            });
        }
        if !inclination_deg.is_finite() {
            return Err(ElementsError::Inclination {
                name,
                value: inclination_deg,
            });
        }
        match shape {
            OrbitShape::Circular { radius: orbit } => {
                if !(orbit.is_finite() && orbit > 0.0) {
                    return Err(ElementsError::OrbitRadius { name, value: orbit });
                }
            }
            OrbitShape::Elliptical {
                perihelion,
                aphelion,
            } => {
                let valid = perihelion.is_finite()
                    && aphelion.is_finite()
                    && perihelion > 0.0
                    && aphelion >= perihelion;
                if !valid {
                    return Err(ElementsError::Apsides {
                        name,
                        perihelion,
                        aphelion,
                    });
                }
                let e = shape.eccentricity();
                if !(0.0..1.0).contains(&e) {
                    return Err(ElementsError::Eccentricity { name, value: e });
                }
            }
        }

        Ok(Self {
            name,
            radius,
            shape,
            orbital_period,
            rotation_period,
            inclination_deg,
        })
    }

    /// Catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visual radius of the body.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Circle or apsides, as cataloged.
    pub fn shape(&self) -> OrbitShape {
        self.shape
    }

    /// Semi-major axis of the orbit, scene units.
    pub fn semi_major_axis(&self) -> f64 {
        self.shape.semi_major_axis()
    }

    /// Eccentricity derived from the apsides; zero for circles.
    pub fn eccentricity(&self) -> f64 {
        self.shape.eccentricity()
    }

    /// Days per revolution around the sun.
    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    /// Days per spin revolution; negative for retrograde bodies.
    pub fn rotation_period(&self) -> f64 {
        self.rotation_period
    }

    /// Tilt of the orbit plane, degrees.
    pub fn inclination_deg(&self) -> f64 {
        self.inclination_deg
    }

    /// Tilt of the orbit plane, radians.
    pub fn inclination_rad(&self) -> f64 {
        self.inclination_deg.to_radians()
    }

    /// `true` for a negative rotation period.
    pub fn is_retrograde(&self) -> bool {
        self.rotation_period < 0.0
    }
}

impl TryFrom<&BodyConfig> for OrbitalElements {
    type Error = ElementsError;

    fn try_from(config: &BodyConfig) -> Result<Self, Self::Error> {
        let shape = OrbitShape::from(config.orbit()?);
        OrbitalElements::new(
            config.name.clone(),
            config.radius,
            shape,
            config.orbital_period_days,
            config.rotation_period_days,
            config.orbital_inclination_deg,
        )
    }
}
