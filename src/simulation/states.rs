//! Core state types for the orbit simulation.
//!
//! Defines the entity model:
//! - `Universe` holds the gravitational constant `G`
//! - `Sun` is a fixed gravity source with an explicit position
//! - `Planet` is a moving body with position/velocity state
//! - `System` holds the list of planets and the current simulation time `t`
//!
//! Constructors validate their physical parameters and fail with a
//! [`ConfigError`] instead of letting the arithmetic divide by zero later.

use nalgebra::Vector2;

use crate::error::ConfigError;

pub type NVec2 = Vector2<f64>;

/// Index handle for a body registered with a simulation.
/// Assigned in supply order, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Shared physical configuration, currently just the gravitational constant.
#[derive(Debug, Clone, Copy)]
pub struct Universe {
    pub g: f64, // gravitational constant
}

impl Universe {
    pub fn new(g: f64) -> Result<Self, ConfigError> {
        if !g.is_finite() || g <= 0.0 {
            return Err(ConfigError::NonPositiveG(g));
        }
        Ok(Self { g })
    }
}

/// Fixed massive body anchoring the gravity law.
/// The position is stored explicitly and never changes during a run.
#[derive(Debug, Clone, Copy)]
pub struct Sun {
    pub mass: f64, // mass
    pub position: NVec2, // fixed position, origin by default
}

impl Sun {
    /// Sun at the origin.
    pub fn new(mass: f64) -> Result<Self, ConfigError> {
        Self::at(mass, NVec2::zeros())
    }

    /// Sun at an explicit position.
    pub fn at(mass: f64, position: NVec2) -> Result<Self, ConfigError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        Ok(Self { mass, position })
    }
}

/// Moving body advanced by the integrator.
#[derive(Debug, Clone)]
pub struct Planet {
    pub mass: f64, // mass, unused by the one-body gravity law
    pub position: NVec2, // position
    pub velocity: NVec2, // velocity
}

impl Planet {
    /// Build a planet on an initial orbit around `sun`.
    ///
    /// The planet starts at `distance` along the x-axis from the sun. Its
    /// speed is the circular orbital speed `sqrt(G * M / distance)` scaled
    /// by `speed_factor`, pointing `angle_deg` degrees counter-clockwise
    /// from the x-axis. The scenario defaults (`speed_factor = 1.0`,
    /// `angle_deg = 90.0`) give an exact counter-clockwise circular orbit.
    pub fn from_orbit(
        universe: &Universe,
        sun: &Sun,
        mass: f64,
        distance: f64,
        speed_factor: f64,
        angle_deg: f64,
    ) -> Result<Self, ConfigError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(mass));
        }
        // distance == 0 would divide by zero in v_circular below
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ConfigError::NonPositiveDistance(distance));
        }

        let v_circular = (universe.g * sun.mass / distance).sqrt();
        let speed = v_circular * speed_factor;

        let angle_rad = angle_deg.to_radians();
        let velocity = NVec2::new(speed * angle_rad.cos(), speed * angle_rad.sin());
        let position = sun.position + NVec2::new(distance, 0.0);

        Ok(Self {
            mass,
            position,
            velocity,
        })
    }
}

/// Ordered collection of planets plus the current simulation time.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Planet>, // bodies in supply order
    pub t: f64, // time
}
