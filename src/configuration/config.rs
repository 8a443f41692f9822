//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`UniverseConfig`]   – shared physical constants
//! - [`SunConfig`]        – the fixed gravity source
//! - [`PlanetConfig`]     – initial orbit parameters for each planet
//! - [`ParametersConfig`] – stepping parameters
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! universe:
//!   G: 2.0                # gravitational constant
//!
//! sun:
//!   mass: 15.0
//!   position: [0.0, 0.0]  # optional, origin by default
//!
//! planets:
//!   - mass: 1.0
//!     distance: 5.0       # initial radius along the x-axis from the sun
//!     speed_factor: 0.6   # optional, 1.0 (exact circular orbit) by default
//!     angle_deg: 90.0     # optional, 90 (perpendicular to the radius) by default
//!
//! parameters:
//!   dt: 0.01              # fixed step size
//!   steps: 2000           # steps per run
//! ```
//!
//! The engine maps this configuration into its internal runtime types,
//! validating the physical parameters along the way.

use serde::Deserialize;

/// Shared physical constants
#[derive(Deserialize, Debug, Clone)]
pub struct UniverseConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
}

/// The fixed gravity source
#[derive(Deserialize, Debug, Clone)]
pub struct SunConfig {
    pub mass: f64, // mass of the source
    #[serde(default)]
    pub position: [f64; 2], // fixed position, origin if omitted
}

/// Initial orbit parameters for a single planet
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub mass: f64, // mass of the planet
    pub distance: f64, // initial radius along the x-axis from the sun
    #[serde(default = "default_speed_factor")]
    pub speed_factor: f64, // scale on the circular orbital speed
    #[serde(default = "default_angle_deg")]
    pub angle_deg: f64, // initial velocity direction, degrees from the x-axis
}

fn default_speed_factor() -> f64 {
    1.0
}

fn default_angle_deg() -> f64 {
    90.0
}

/// Stepping parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // fixed step size
    pub steps: usize, // steps per run
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub universe: UniverseConfig, // shared physical constants
    pub sun: SunConfig, // the fixed gravity source
    pub planets: Vec<PlanetConfig>, // planets in supply order
    pub parameters: ParametersConfig, // stepping parameters
}
