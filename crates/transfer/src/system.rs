//! The legacy sandbox: five planets on circular starts plus the spaceship.

use orrery_config::TransferSettings;

use crate::TransferError;
use crate::planner::{LaunchRequest, TransferPlanner, validate_settings};
use crate::two_body::OrbitingBody;

/// Starting orbital radii of the sandbox planets.
pub const LEGACY_PLANET_RADII: [f64; 5] = [20.0, 50.0, 100.0, 200.0, 300.0];
/// Starting orbital radius of the spaceship.
pub const LEGACY_SHIP_RADIUS: f64 = 75.0;

#[derive(Debug, Clone)]
pub struct LegacySystem {
    planets: Vec<OrbitingBody>,
    planner: TransferPlanner,
    gm: f64,
    dt: f64,
    steps: u64,
}

impl LegacySystem {
    /// Planets start on the +x axis at the given radii, the ship at `ship_radius`.
    pub fn new(
        planet_radii: &[f64],
        ship_radius: f64,
        settings: &TransferSettings,
    ) -> Result<Self, TransferError> {
        validate_settings(settings)?;
        let planets = planet_radii
            .iter()
            .map(|&r| OrbitingBody::circular([r, 0.0, 0.0], settings.gm))
            .collect::<Result<Vec<_>, _>>()?;
        let planner = TransferPlanner::new([ship_radius, 0.0, 0.0], settings)?;
        Ok(Self {
            planets,
            planner,
            gm: settings.gm,
            dt: settings.dt,
            steps: 0,
        })
    }

    /// Five planets at radii 20 to 300 and the ship at 75.
    pub fn classic(settings: &TransferSettings) -> Result<Self, TransferError> {
        Self::new(&LEGACY_PLANET_RADII, LEGACY_SHIP_RADIUS, settings)
    }

    pub fn planets(&self) -> &[OrbitingBody] {
        &self.planets
    }

    pub fn planner(&self) -> &TransferPlanner {
        &self.planner
    }

    /// Number of integration steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Elapsed integration time (`steps * dt`).
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    /// Arm a launch toward planet `index` (catalog order).
    pub fn set_launch_window(&mut self, index: usize) -> Result<LaunchRequest, TransferError> {
        let target = self
            .planets
            .get(index)
            .ok_or(TransferError::UnknownDestination(index))?
            .position;
        self.planner.set_launch_window(index, &target)
    }

    /// Advance every planet, then the ship. Returns `true` when the ship launched.
    pub fn step(&mut self) -> bool {
        for planet in &mut self.planets {
            planet.step(self.gm, self.dt);
        }
        self.steps += 1;
        self.planner.step()
    }
}
