//! Error types for the orbit simulation.
//!
//! Two concerns, both fatal for the run that hits them:
//! - [`ConfigError`] for invalid physical parameters at construction time
//! - [`SimError`] for failures during or after integration

use thiserror::Error;

use crate::simulation::states::BodyId;

/// Invalid scenario or construction parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("gravitational constant must be positive and finite, got {0}")]
    NonPositiveG(f64),

    #[error("body mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("orbit distance must be positive and finite, got {0}")]
    NonPositiveDistance(f64),

    #[error("time step must be positive and finite, got {0}")]
    NonPositiveDt(f64),
}

/// Failure while running a simulation or querying its results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A body reached the gravity source exactly, making the
    /// inverse-square acceleration singular. Terminates the run.
    #[error("body {body:?} reached the gravity source, acceleration is singular")]
    Singularity { body: BodyId },

    #[error("body {body:?} is not tracked by this simulation")]
    UnknownBody { body: BodyId },
}
