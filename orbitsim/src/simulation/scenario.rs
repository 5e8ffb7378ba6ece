//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) or runtime `Parameters` plus body
//! descriptors and produces a `Simulation` containing:
//! - validated parameters (`Parameters`)
//! - the body registry at t = 0, every trail filled with the start position
//! - the active force set and, if enabled, the apoapsis detector
//!
//! Every check runs before anything is built; the first violation is
//! returned and no simulation exists

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::{ApoapsisAudio, BoundaryDamping, Parameters, VelocityClamp};
use crate::simulation::states::{Body, Color, NVec3, SonificationTag};
use crate::simulation::trail::TrailBuffer;

const DEFAULT_PITCH: i32 = 4;

impl Parameters {
    /// Map the YAML-facing sections onto runtime parameters
    pub fn from_config(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        let parameters = Parameters {
            dt: cfg.engine.dt,
            trail_depth: cfg.engine.trail_depth,
            min_distance: cfg.engine.min_distance,
            velocity_clamp: cfg.safeguards.velocity_clamp.map(|max| VelocityClamp { max }),
            boundary_damping: cfg.safeguards.boundary_damping.as_ref().map(|d| BoundaryDamping {
                radius: d.radius,
                factor: d.factor,
            }),
            apoapsis_audio: cfg.audio.as_ref().map(|a| ApoapsisAudio {
                long_ms: a.long_ms,
                short_ms: a.short_ms,
                emphasis: a.emphasis,
                duration: a.duration,
            }),
        };
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        // the detector reads two trail slots
        let min_depth = if self.apoapsis_audio.is_some() { 2 } else { 1 };
        if self.trail_depth < min_depth {
            return Err(ConfigError::TrailTooShort { min: min_depth, actual: self.trail_depth });
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(ConfigError::InvalidMinDistance(self.min_distance));
        }
        if let Some(c) = &self.velocity_clamp {
            if !(c.max > 0.0) {
                return Err(ConfigError::InvalidVelocityClamp(c.max));
            }
        }
        if let Some(d) = &self.boundary_damping {
            if !(d.radius > 0.0) || !(0.0..=1.0).contains(&d.factor) {
                return Err(ConfigError::InvalidDamping { radius: d.radius, factor: d.factor });
            }
        }
        if let Some(a) = &self.apoapsis_audio {
            if a.short_ms > a.long_ms {
                return Err(ConfigError::InvalidGate { short_ms: a.short_ms, long_ms: a.long_ms });
            }
            if !(a.emphasis > 0.0) {
                return Err(ConfigError::InvalidEmphasis(a.emphasis));
            }
        }
        Ok(())
    }
}

fn vec3(index: usize, field: &'static str, xs: &[f64]) -> Result<NVec3, ConfigError> {
    match xs {
        [x, y, z] if xs.iter().all(|c| c.is_finite()) => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(ConfigError::MalformedVector {
            index,
            field,
            actual: xs.to_vec(),
        }),
    }
}

fn build_body(index: usize, bc: &BodyConfig, trail_depth: usize) -> Result<Body, ConfigError> {
    if !(bc.m.is_finite() && bc.m > 0.0) {
        return Err(ConfigError::InvalidMass { index, mass: bc.m });
    }
    if !(bc.radius.is_finite() && bc.radius > 0.0) {
        return Err(ConfigError::InvalidRadius { index, radius: bc.radius });
    }
    let x = vec3(index, "x", &bc.x)?;
    let v = vec3(index, "v", &bc.v)?;
    if bc.anchor && v != NVec3::zeros() {
        return Err(ConfigError::MovingAnchor { index });
    }

    if let Some(duration) = bc.duration {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(ConfigError::InvalidDuration { index, duration });
        }
    }

    let tag = match &bc.note {
        Some(note) => Some(SonificationTag {
            note: note.clone(),
            pitch: bc.pitch.unwrap_or(DEFAULT_PITCH),
            duration: bc.duration,
        }),
        None if bc.pitch.is_some() || bc.duration.is_some() => {
            return Err(ConfigError::PitchWithoutNote { index });
        }
        None => None,
    };

    Ok(Body {
        id: index,
        x,
        v,
        a: NVec3::zeros(),
        m: bc.m,
        radius: bc.radius,
        color: Color(bc.color & 0xffffff),
        anchor: bc.anchor,
        tag,
        trail: TrailBuffer::filled(trail_depth, x),
    })
}

impl Simulation {
    /// Validate a loaded scenario and build the simulation
    pub fn build(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let parameters = Parameters::from_config(&cfg)?;
        Self::from_descriptors(parameters, &cfg.bodies)
    }

    /// Validate runtime parameters and body descriptors and build the simulation
    pub fn from_descriptors(parameters: Parameters, descriptors: &[BodyConfig]) -> Result<Self, ConfigError> {
        parameters.validate()?;

        let mut anchor: Option<usize> = None;
        for (i, bc) in descriptors.iter().enumerate() {
            if bc.anchor {
                if let Some(first) = anchor {
                    return Err(ConfigError::MultipleAnchors { first, second: i });
                }
                anchor = Some(i);
            }
        }

        let bodies = descriptors
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc, parameters.trail_depth))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "built simulation: {} bodies, anchor {:?}, dt = {}, trail depth {}, audio {}",
            bodies.len(),
            anchor,
            parameters.dt,
            parameters.trail_depth,
            parameters.apoapsis_audio.is_some(),
        );

        Ok(Simulation::from_parts(bodies, parameters))
    }
}
