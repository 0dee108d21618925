//! Spaceship launch state machine for the two-body sandbox.
//!
//! `Idle` ship coasts on its parking orbit. Arming a launch window records the
//! destination and the window geometry; the burn happens on the next step,
//! after which the ship is `InFlight` for good. There is no arrival or
//! circularization logic: a launched ship coasts indefinitely.

use orrery_config::TransferSettings;
use orrery_core::vector::{self, Vector3};

use crate::TransferError;
use crate::hohmann::{LaunchWindow, launch_window};
use crate::two_body::{OrbitingBody, prograde_unit};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferState {
    Idle,
    LaunchWindowArmed {
        destination: usize,
        window: LaunchWindow,
    },
    InFlight {
        destination: usize,
        window: LaunchWindow,
    },
}

/// Outcome of a launch-window request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchRequest {
    Armed(LaunchWindow),
    /// A pending window was replaced before its burn fired.
    Rearmed(LaunchWindow),
    /// The ship is already in flight; nothing changed.
    IgnoredInFlight,
}

#[derive(Debug, Clone)]
pub struct TransferPlanner {
    ship: OrbitingBody,
    state: TransferState,
    gm: f64,
    dt: f64,
    launch_speed: f64,
}

impl TransferPlanner {
    /// Put the ship on a circular parking orbit through `position`.
    pub fn new(position: Vector3, settings: &TransferSettings) -> Result<Self, TransferError> {
        validate_settings(settings)?;
        Ok(Self {
            ship: OrbitingBody::circular(position, settings.gm)?,
            state: TransferState::Idle,
            gm: settings.gm,
            dt: settings.dt,
            launch_speed: settings.launch_speed,
        })
    }

    pub fn ship(&self) -> &OrbitingBody {
        &self.ship
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, TransferState::InFlight { .. })
    }

    /// Arm a launch toward the body currently at `destination_position`.
    pub fn set_launch_window(
        &mut self,
        destination: usize,
        destination_position: &Vector3,
    ) -> Result<LaunchRequest, TransferError> {
        let rearm = match self.state {
            TransferState::InFlight { .. } => {
                tracing::debug!(destination, "launch window ignored: ship already in flight");
                return Ok(LaunchRequest::IgnoredInFlight);
            }
            TransferState::LaunchWindowArmed { .. } => true,
            TransferState::Idle => false,
        };

        let window = launch_window(self.ship.radius(), vector::norm(destination_position))?;
        tracing::info!(
            destination,
            phi_deg = window.phi_deg,
            theta_deg = window.theta_deg,
            "launch window set"
        );
        self.state = TransferState::LaunchWindowArmed {
            destination,
            window,
        };
        Ok(if rearm {
            LaunchRequest::Rearmed(window)
        } else {
            LaunchRequest::Armed(window)
        })
    }

    /// Integrate one fixed step; fires the launch burn if a window is armed.
    ///
    /// Returns `true` on the step that launched the ship.
    pub fn step(&mut self) -> bool {
        self.ship.step(self.gm, self.dt);

        let TransferState::LaunchWindowArmed {
            destination,
            window,
        } = self.state
        else {
            return false;
        };

        if let Some(tangent) = prograde_unit(&self.ship.position) {
            self.ship.velocity = vector::scale(&tangent, self.launch_speed);
        }
        self.state = TransferState::InFlight {
            destination,
            window,
        };
        tracing::info!(destination, speed = self.launch_speed, "launch burn executed");
        true
    }
}

pub(crate) fn validate_settings(settings: &TransferSettings) -> Result<(), TransferError> {
    if !(settings.gm.is_finite() && settings.gm > 0.0) {
        return Err(TransferError::InvalidGm(settings.gm));
    }
    if !(settings.dt.is_finite() && settings.dt > 0.0) {
        return Err(TransferError::InvalidStep(settings.dt));
    }
    if !(settings.launch_speed.is_finite() && settings.launch_speed >= 0.0) {
        return Err(TransferError::InvalidLaunchSpeed(settings.launch_speed));
    }
    Ok(())
}
