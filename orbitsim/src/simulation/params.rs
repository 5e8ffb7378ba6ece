//! Numerical parameters and optional features of a simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and trail depth,
//! - the minimum pair distance used by gravity,
//! - optional velocity clamp, boundary damping and apoapsis audio
//!
//! The two presets reproduce the plain and the damped + sonifying variants

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityClamp {
    pub max: f64, // per-component speed limit
}

/// Heuristic escape brake, not physically derived
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryDamping {
    pub radius: f64, // per-axis bound
    pub factor: f64, // velocity multiplier while escaping
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApoapsisAudio {
    pub long_ms: u64,   // fire unconditionally after this long
    pub short_ms: u64,  // fire on acceptance after this long
    pub emphasis: f64,  // trail scale of the flashed slot
    pub duration: f64,  // note length in seconds
}

impl Default for ApoapsisAudio {
    fn default() -> Self {
        Self {
            long_ms: 2000,
            short_ms: 500,
            emphasis: 15.0,
            duration: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64,                   // fixed step size
    pub trail_depth: usize,        // slots per trail buffer
    pub min_distance: f64,         // floor for pair separation
    pub velocity_clamp: Option<VelocityClamp>,
    pub boundary_damping: Option<BoundaryDamping>,
    pub apoapsis_audio: Option<ApoapsisAudio>,
}

pub const DEFAULT_TRAIL_DEPTH: usize = 70;
pub const DEFAULT_MIN_DISTANCE: f64 = 1.0e-6;

impl Parameters {
    /// Undamped, silent variant
    pub fn plain() -> Self {
        Self {
            dt: 0.2,
            trail_depth: DEFAULT_TRAIL_DEPTH,
            min_distance: DEFAULT_MIN_DISTANCE,
            velocity_clamp: None,
            boundary_damping: None,
            apoapsis_audio: None,
        }
    }

    /// Damped variant that plays a note at each apoapsis
    pub fn sonifying() -> Self {
        Self {
            dt: 1.0,
            trail_depth: DEFAULT_TRAIL_DEPTH,
            min_distance: DEFAULT_MIN_DISTANCE,
            velocity_clamp: Some(VelocityClamp { max: 500.0 }),
            boundary_damping: Some(BoundaryDamping { radius: 5000.0, factor: 0.1 }),
            apoapsis_audio: Some(ApoapsisAudio::default()),
        }
    }
}
