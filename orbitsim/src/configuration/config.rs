//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – step size, trail depth, minimum pair distance
//! - [`SafeguardsConfig`] – optional velocity clamp and boundary damping
//! - [`AudioConfig`]      – optional apoapsis sonification
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body sonifying scenario matching these types:
//!
//! ```yaml
//! engine:
//!   dt: 1.0                 # fixed step size
//!   trail_depth: 70         # slots per trail
//!
//! safeguards:
//!   velocity_clamp: 500.0
//!   boundary_damping:
//!     radius: 5000.0
//!     factor: 0.1
//!
//! audio:
//!   long_ms: 2000
//!   short_ms: 500
//!   emphasis: 15.0
//!   duration: 0.5
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 10000000.0
//!     radius: 100.0
//!     color: 0xffe030
//!     anchor: true
//!   - x: [ 800.0, 0.0, 500.0 ]
//!     v: [ 0.0, 110.0, 0.0 ]
//!     m: 20.0
//!     radius: 20.0
//!     color: 0xff5533
//!     note: "C"
//!     pitch: 4
//!     duration: 0.25        # optional, overrides audio.duration
//! ```
//!
//! Missing `safeguards` / `audio` sections disable those features.
//! [`crate::Simulation::build`] validates the whole thing before anything runs.

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_MIN_DISTANCE, DEFAULT_TRAIL_DEPTH};

fn default_trail_depth() -> usize {
    DEFAULT_TRAIL_DEPTH
}

fn default_min_distance() -> f64 {
    DEFAULT_MIN_DISTANCE
}

/// Engine-level numerical settings
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub dt: f64, // fixed time step
    #[serde(default = "default_trail_depth")]
    pub trail_depth: usize, // number of trail slots per body
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // floor for pair separation, keeps 1/r^2 finite
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dt: 0.2,
            trail_depth: DEFAULT_TRAIL_DEPTH,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

/// Escape brake settings
#[derive(Deserialize, Debug, Clone)]
pub struct DampingConfig {
    pub radius: f64, // per-axis bound
    pub factor: f64, // multiplier applied to outward velocity beyond the bound
}

/// Post-integration stabilization, both optional
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SafeguardsConfig {
    pub velocity_clamp: Option<f64>, // per-component speed limit
    pub boundary_damping: Option<DampingConfig>,
}

/// Apoapsis sonification gate
#[derive(Deserialize, Debug, Clone)]
pub struct AudioConfig {
    #[serde(default = "AudioConfig::default_long_ms")]
    pub long_ms: u64, // unconditional refire interval
    #[serde(default = "AudioConfig::default_short_ms")]
    pub short_ms: u64, // probabilistic refire interval
    #[serde(default = "AudioConfig::default_emphasis")]
    pub emphasis: f64, // trail scale of the slot recorded at a fired apoapsis
    #[serde(default = "AudioConfig::default_duration")]
    pub duration: f64, // note length in seconds
}

impl AudioConfig {
    fn default_long_ms() -> u64 {
        2000
    }

    fn default_short_ms() -> u64 {
        500
    }

    fn default_emphasis() -> f64 {
        15.0
    }

    fn default_duration() -> f64 {
        0.5
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            long_ms: Self::default_long_ms(),
            short_ms: Self::default_short_ms(),
            emphasis: Self::default_emphasis(),
            duration: Self::default_duration(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>,    // initial position, three components
    pub v: Vec<f64>,    // initial velocity, three components
    pub m: f64,         // mass, G folded in
    pub radius: f64,    // render radius
    #[serde(default = "BodyConfig::default_color")]
    pub color: u32,     // 0xRRGGBB
    #[serde(default)]
    pub anchor: bool,   // at most one body may be anchored
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub pitch: Option<i32>, // octave, defaults to 4 when only a note is given
    #[serde(default)]
    pub duration: Option<f64>, // note length in seconds, overrides `audio.duration`
}

impl BodyConfig {
    fn default_color() -> u32 {
        0xffffff
    }

    /// Free body with no sonification
    pub fn new(x: [f64; 3], v: [f64; 3], m: f64, radius: f64) -> Self {
        Self {
            x: x.to_vec(),
            v: v.to_vec(),
            m,
            radius,
            color: Self::default_color(),
            anchor: false,
            note: None,
            pitch: None,
            duration: None,
        }
    }

    pub fn anchored(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_note(mut self, note: &str, pitch: i32) -> Self {
        self.note = Some(note.to_string());
        self.pitch = Some(pitch);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub safeguards: SafeguardsConfig,
    #[serde(default)]
    pub audio: Option<AudioConfig>,
    pub bodies: Vec<BodyConfig>,
}
