//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Simulation`] containing:
//! - the universe and sun (validated physical parameters)
//! - the planets on their initial orbits (derived kinematic state)
//! - the central-gravity force set and stepping parameters
//!
//! All validation failures surface as [`ConfigError`]s naming the
//! offending value.

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::states::{NVec2, Planet, Sun, Universe};

/// Map a deserialized scenario into a ready-to-run [`Simulation`].
pub fn build_simulation(cfg: ScenarioConfig) -> Result<Simulation, ConfigError> {
    let universe = Universe::new(cfg.universe.g)?;
    let sun = Sun::at(
        cfg.sun.mass,
        NVec2::new(cfg.sun.position[0], cfg.sun.position[1]),
    )?;

    // Planets: map PlanetConfig -> runtime Planet with derived velocity
    let mut planets = Vec::with_capacity(cfg.planets.len());
    for pc in &cfg.planets {
        planets.push(Planet::from_orbit(
            &universe,
            &sun,
            pc.mass,
            pc.distance,
            pc.speed_factor,
            pc.angle_deg,
        )?);
    }

    debug!(
        "scenario: {} planets, dt = {}, steps = {}",
        planets.len(),
        cfg.parameters.dt,
        cfg.parameters.steps
    );

    Simulation::new(
        universe,
        sun,
        planets,
        cfg.parameters.dt,
        cfg.parameters.steps,
    )
}
