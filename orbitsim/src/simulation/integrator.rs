//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by the accelerations already
//! stored on each body

use crate::simulation::states::Body;

/// Advance every body by one step of size `dt`
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
pub fn semi_implicit_euler(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        // Kick first: the updated velocity drives the drift
        b.v += dt * b.a;
        b.x += dt * b.v;
    }
}
