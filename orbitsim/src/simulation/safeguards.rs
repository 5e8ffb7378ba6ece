//! Stabilization applied after integration.
//!
//! Neither correction is physical. The clamp suppresses blow-up from close
//! encounters; the boundary damping brakes bodies that keep escaping past
//! the bounding box so their magnitudes stay renderable.

use log::debug;

use crate::simulation::params::{BoundaryDamping, VelocityClamp};
use crate::simulation::states::Body;

impl VelocityClamp {
    pub fn apply(&self, b: &mut Body) {
        for k in 0..3 {
            b.v[k] = b.v[k].clamp(-self.max, self.max);
        }
    }
}

impl BoundaryDamping {
    /// Scale the velocity component of every axis on which the body is
    /// outside the bound and still moving outward
    pub fn apply(&self, b: &mut Body) {
        for k in 0..3 {
            let x = b.x[k];
            let v = b.v[k];
            if x.abs() > self.radius && x * v > 0.0 {
                b.v[k] = v * self.factor;
                debug!("damping body {} on axis {}: x = {:.1}, v = {:.3}", b.id, k, x, v);
            }
        }
    }
}

/// Run the configured safeguards over all bodies, clamp before damping
pub fn stabilize(bodies: &mut [Body], clamp: Option<&VelocityClamp>, damping: Option<&BoundaryDamping>) {
    if clamp.is_none() && damping.is_none() {
        return;
    }
    for b in bodies.iter_mut() {
        if let Some(c) = clamp {
            c.apply(b);
        }
        if let Some(d) = damping {
            d.apply(b);
        }
    }
}
