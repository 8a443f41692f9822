//! Force / acceleration contributors for the orbit engine
//!
//! Defines the acceleration trait and the production term: Newtonian
//! gravity from a single fixed source. Planets do not attract each other
//! or the sun.

use crate::error::SimError;
use crate::simulation::states::{BodyId, NVec2, System};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Fails without touching any body state if a term hits a singularity.
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), SimError>;
}

/// Newtonian gravity from a single fixed source (the sun).
///
/// No softening: a body exactly at the source position is a hard
/// singularity and fails the evaluation with [`SimError::Singularity`].
pub struct CentralGravity {
    pub g: f64, // gravitational constant
    pub source_mass: f64, // mass of the fixed source
    pub source_pos: NVec2, // position of the fixed source
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), SimError> {
        for (i, b) in sys.bodies.iter().enumerate() {
            // d points from the source to the body; the pull is along -d
            let d = b.position - self.source_pos;

            // Squared separation distance |d|^2
            let r2 = d.norm_squared();
            if r2 == 0.0 {
                return Err(SimError::Singularity { body: BodyId(i) });
            }

            // 1 / |d|
            let inv_r = r2.sqrt().recip();

            // 1 / |d|^3, as in the Newtonian acceleration formula:
            //   a = -G * M * d / |d|^3
            let inv_r3 = inv_r * inv_r * inv_r;

            out[i] -= self.g * self.source_mass * inv_r3 * d;
        }
        Ok(())
    }
}
