//! Numerical parameters for the simulation
//!
//! `Parameters` holds the runtime stepping settings:
//! - fixed integration step size `dt`,
//! - number of steps executed per `run()` call

#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub steps: usize, // steps per run() call
}
