//! A body placed on its orbit: elements, chosen model and cached start phase.

use chrono::{DateTime, Utc};
use orrery_core::vector::Vector3;

use crate::elements::{ElementsError, OrbitalElements};
use crate::epoch::{PeriodUnit, initial_angle};
use crate::solver::{
    BodyState, OrbitModel, circular_point, ellipse_point, orbital_angle, rotation_angle,
    sample_path,
};

/// An orbiting body ready to be evaluated every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    elements: OrbitalElements,
    model: OrbitModel,
    initial_angle: f64,
}

impl Body {
    /// Build from an explicit start phase in radians.
    pub fn new(elements: OrbitalElements, model: OrbitModel, initial_angle: f64) -> Self {
        Self {
            elements,
            model,
            initial_angle,
        }
    }

    /// Build with the start phase anchored to a calendar date.
    ///
    /// The phase is computed once here and never recomputed afterwards.
    pub fn anchored(
        elements: OrbitalElements,
        model: OrbitModel,
        initial_date: DateTime<Utc>,
        reference_epoch: DateTime<Utc>,
        unit: PeriodUnit,
    ) -> Self {
        let period = unit.convert_days(elements.orbital_period());
        let phase = initial_angle(initial_date, reference_epoch, period, unit);
        tracing::debug!(
            body = elements.name(),
            phase_rad = phase,
            "anchored initial phase"
        );
        Self::new(elements, model, phase)
    }

    /// Validated elements the body was built from.
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Catalog name.
    pub fn name(&self) -> &str {
        self.elements.name()
    }

    /// Point function used for positions and the drawn path.
    pub fn model(&self) -> OrbitModel {
        self.model
    }

    /// Cached phase at simulation start, radians.
    pub fn initial_angle(&self) -> f64 {
        self.initial_angle
    }

    /// The single point function shared by the live position and the drawn path.
    pub fn point_at_angle(&self, angle: f64) -> Vector3 {
        let a = self.elements.semi_major_axis();
        match self.model {
            OrbitModel::Circular => circular_point(a, angle),
            OrbitModel::Elliptical => ellipse_point(
                a,
                self.elements.eccentricity(),
                self.elements.inclination_rad(),
                angle,
            ),
        }
    }

    /// Position and spin after `elapsed_days` of simulation time.
    pub fn state_at(&self, elapsed_days: f64) -> BodyState {
        let angle = orbital_angle(
            self.initial_angle,
            elapsed_days,
            self.elements.orbital_period(),
        );
        BodyState {
            position: self.point_at_angle(angle),
            rotation_y: rotation_angle(elapsed_days, self.elements.rotation_period()),
            orbital_angle: angle,
        }
    }

    /// Closed orbit polyline with `segments` segments.
    pub fn orbit_path(&self, segments: usize) -> Vec<Vector3> {
        sample_path(segments, |angle| self.point_at_angle(angle))
    }
}

/// A body that only spins in place, like the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    rotation_period: f64,
}

impl Spin {
    /// Rejects a zero or non-finite rotation period.
    pub fn new(name: &str, rotation_period: f64) -> Result<Self, ElementsError> {
        if !rotation_period.is_finite() || rotation_period == 0.0 {
            return Err(ElementsError::RotationPeriod {
                name: name.to_string(),
                value: rotation_period,
            });
        }
        Ok(Self { rotation_period })
    }

    /// Days per spin revolution; negative for retrograde spin.
    pub fn rotation_period(&self) -> f64 {
        self.rotation_period
    }

    /// Spin angle after `elapsed_days`, same convention as orbiting bodies.
    pub fn rotation_at(&self, elapsed_days: f64) -> f64 {
        rotation_angle(elapsed_days, self.rotation_period)
    }
}
