//! Fixed-step time integrator for the orbit system
//!
//! Provides the symplectic (semi-implicit) Euler step driven by
//! `AccelSet` and `Parameters`

use crate::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Advance the system by one step using symplectic Euler
///
/// One force evaluation per step. Velocities are updated first, then
/// positions using the *newly computed* velocities:
///
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
///
/// Updates positions, velocities, and `sys.t` in-place based on
/// `params.dt`. Bodies are updated independently, so no state is touched
/// if the force evaluation fails.
pub fn euler_symplectic(sys: &mut System, forces: &AccelSet, params: &Parameters) -> Result<(), SimError> {
    let dt = params.dt; // time step dt

    let n = sys.bodies.len();
    if n == 0 { // no bodies, still advance time
        sys.t += dt;
        return Ok(());
    }

    // a_n from x_n at time t = sys.t, one per body
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accels)?;

    // Kick then drift with the updated velocity:
    // v_n+1 = v_n + dt * a_n
    // x_n+1 = x_n + dt * v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.velocity += dt * *a;
        b.position += dt * b.velocity;
    }

    // Increment the system time by one full step
    sys.t += dt;

    Ok(())
}
