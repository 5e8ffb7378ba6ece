//! Core state types for the N-body simulation.
//!
//! Defines the body registry entries:
//! - `Body` with `NVec3` position / velocity / acceleration
//! - `Color`, the opaque 24-bit render attribute
//! - `SonificationTag`, the note a body plays at its apoapsis
//!
//! Bodies are owned by [`crate::Simulation`]; everything here is plain data.

use nalgebra::Vector3;

use crate::simulation::trail::TrailBuffer;

pub type NVec3 = Vector3<f64>;

/// 24-bit RGB color, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Raise every channel by `round(2.55 * percent)`, clamped to `[0, 255]`
    /// Used to fade trail slots towards white the older they get
    pub fn lighten(self, percent: f64) -> Color {
        let amt = (2.55 * percent).round() as i64;
        let channel = |shift: u32| -> u32 {
            let c = ((self.0 >> shift) & 0xff) as i64 + amt;
            c.clamp(0, 255) as u32
        };
        Color((channel(16) << 16) | (channel(8) << 8) | channel(0))
    }
}

/// Note played when the body passes its apoapsis
#[derive(Debug, Clone, PartialEq)]
pub struct SonificationTag {
    pub note: String, // note name, e.g. "C", "F#"
    pub pitch: i32,   // octave
    pub duration: Option<f64>, // seconds, falls back to the audio setting
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: usize,     // stable index in the registry
    pub x: NVec3,      // position
    pub v: NVec3,      // velocity
    pub a: NVec3,      // acceleration accumulated this tick
    pub m: f64,        // mass (G folded in)
    pub radius: f64,   // render radius, no physical meaning
    pub color: Color,
    pub anchor: bool,  // held stationary, frame corrected
    pub tag: Option<SonificationTag>,
    pub trail: TrailBuffer,
}

impl Body {
    /// Squared distance from the origin
    pub fn radial2(&self) -> f64 {
        self.x.norm_squared()
    }
}
