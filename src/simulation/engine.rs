//! The simulation engine: owns the bodies, steps them through time,
//! and records one trajectory per body.
//!
//! This is the piece an external renderer or analysis tool consumes: it
//! exposes the recorded trajectories, the step size and step count, and
//! the body ordering.

use log::{debug, info};

use crate::error::{ConfigError, SimError};
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::integrator::euler_symplectic;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, NVec2, Planet, Sun, System, Universe};

/// A fully wired simulation: universe, sun, planets, force set, stepping
/// parameters, and the per-body trajectory log.
pub struct Simulation {
    universe: Universe,
    sun: Sun,
    system: System,
    forces: AccelSet,
    parameters: Parameters,
    trajectories: Vec<Vec<NVec2>>, // one log per body, indexed by BodyId
}

impl Simulation {
    /// Wire up a simulation over the given bodies.
    ///
    /// Registers central gravity from `sun` as the only force term and
    /// allocates an empty trajectory per body.
    pub fn new(
        universe: Universe,
        sun: Sun,
        planets: Vec<Planet>,
        dt: f64,
        steps: usize,
    ) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::NonPositiveDt(dt));
        }

        let forces = AccelSet::new().with(CentralGravity {
            g: universe.g,
            source_mass: sun.mass,
            source_pos: sun.position,
        });

        let trajectories = vec![Vec::new(); planets.len()];
        let system = System {
            bodies: planets,
            t: 0.0,
        };

        Ok(Self {
            universe,
            sun,
            system,
            forces,
            parameters: Parameters { dt, steps },
            trajectories,
        })
    }

    /// Advance every body by `steps()` fixed steps, appending each body's
    /// post-step position to its trajectory.
    ///
    /// Not idempotent: `run()` continues from wherever the system is, so a
    /// second call appends `steps()` more entries per body instead of
    /// resetting. On a singularity the error surfaces immediately and the
    /// trajectories keep everything recorded before the failing step.
    pub fn run(&mut self) -> Result<(), SimError> {
        info!(
            "run: {} steps, dt = {}, {} bodies, starting at t = {}",
            self.parameters.steps,
            self.parameters.dt,
            self.system.bodies.len(),
            self.system.t
        );

        for _ in 0..self.parameters.steps {
            euler_symplectic(&mut self.system, &self.forces, &self.parameters)?;

            for (body, track) in self.system.bodies.iter().zip(self.trajectories.iter_mut()) {
                track.push(body.position);
            }
        }

        debug!("run: finished at t = {}", self.system.t);
        Ok(())
    }

    /// Recorded positions for one body, in recording order.
    pub fn trajectory(&self, body: BodyId) -> Result<&[NVec2], SimError> {
        self.trajectories
            .get(body.0)
            .map(Vec::as_slice)
            .ok_or(SimError::UnknownBody { body })
    }

    /// Steps executed per `run()` call.
    pub fn steps(&self) -> usize {
        self.parameters.steps
    }

    /// Fixed integration step size.
    pub fn dt(&self) -> f64 {
        self.parameters.dt
    }

    /// Total steps recorded so far, across all `run()` calls.
    pub fn completed_steps(&self) -> usize {
        self.trajectories.first().map_or(0, Vec::len)
    }

    /// Bodies in supply order; index i corresponds to `BodyId(i)`.
    pub fn bodies(&self) -> &[Planet] {
        &self.system.bodies
    }

    pub fn body_ids(&self) -> impl Iterator<Item = BodyId> {
        (0..self.system.bodies.len()).map(BodyId)
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.system.t
    }
}
