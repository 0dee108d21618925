//! Exponential time-scale control (`scale = 10^exponent`).

use orrery_config::TimeScaleSettings;

use crate::controller::ClockError;

/// Slider-style exponent clamped to a range and snapped to a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    exponent: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl TimeScale {
    /// Range `[min, max]` of exponents; `initial` is clamped and snapped into it.
    pub fn new(initial: f64, min: f64, max: f64, step: f64) -> Result<Self, ClockError> {
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(ClockError::InvalidExponentRange { min, max });
        }
        let mut scale = Self {
            exponent: min,
            min,
            max,
            step,
        };
        scale.set_exponent(initial);
        Ok(scale)
    }

    /// Build from the `[time_scale]` settings section.
    pub fn from_settings(settings: &TimeScaleSettings) -> Result<Self, ClockError> {
        Self::new(
            settings.initial_exponent,
            settings.min_exponent,
            settings.max_exponent,
            settings.step,
        )
    }

    /// Set the exponent, clamped and snapped; returns the resulting scale factor.
    pub fn set_exponent(&mut self, exponent: f64) -> f64 {
        let mut e = if exponent.is_finite() {
            exponent
        } else {
            self.exponent
        };
        if self.step > 0.0 && self.step.is_finite() {
            e = self.min + ((e - self.min) / self.step).round() * self.step;
        }
        self.exponent = e.clamp(self.min, self.max);
        self.factor()
    }

    /// Current slider exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// `10^exponent`.
    pub fn factor(&self) -> f64 {
        10f64.powf(self.exponent)
    }

    /// Label shown next to the slider, e.g. `Time Scale: 100000x`.
    pub fn label(&self) -> String {
        format!("Time Scale: {:.0}x", self.factor())
    }
}
