//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the direct pairwise gravity term and the
//! anchor frame correction applied after all terms have been summed

use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

/// Acceleration source operating on the body registry
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]);
}

/// Direct Newtonian gravity, G folded into the mass units
///
/// `min_distance` floors the pair separation so coincident bodies give a
/// zero contribution instead of NaN
pub struct PairwiseGravity {
    pub min_distance: f64,
}

impl Acceleration for PairwiseGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) {
        let n = bodies.len();

        // Each body is resolved once all its pairings with later bodies
        // have been folded in, so every unordered pair is visited once
        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // d points from j to i
                let d = bi.x - bj.x;
                let r = d.norm().max(self.min_distance);
                let r2 = r * r;

                // i is pulled along -d by j's mass
                out[i] -= d * (bj.m / r2) / r;

                // j is pulled along +d by i's mass
                out[j] += d * (bi.m / r2) / r;
            }
        }
    }
}

/// Re-express accelerations in the anchor's frame
///
/// The anchor's accumulated acceleration is subtracted from every other
/// body, then the anchor's own acceleration is zeroed
pub fn correct_anchor_frame(anchor: Option<usize>, out: &mut [NVec3]) {
    let Some(k) = anchor else {
        return;
    };
    let drift = out[k];
    for (i, a) in out.iter_mut().enumerate() {
        if i != k {
            *a -= drift;
        }
    }
    out[k] = NVec3::zeros();
}
