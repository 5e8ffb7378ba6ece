//! Fixed-depth, newest-first position history for trail rendering.
//!
//! The buffer never grows or shrinks: `record` shifts every slot one place
//! towards the back (dropping the oldest) and writes the new position into
//! slot 0. The apoapsis detector reads slots 0 and 1 as its sample window.

use crate::simulation::states::NVec3;

/// Render scale of a freshly recorded slot
pub const BASE_SCALE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: NVec3,
    pub scale: f64,
}

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    slots: Vec<TrailPoint>,
}

impl TrailBuffer {
    /// Buffer of `capacity` slots, all at `x` with base scale
    pub fn filled(capacity: usize, x: NVec3) -> Self {
        Self {
            slots: vec![TrailPoint { x, scale: BASE_SCALE }; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, i: usize) -> Option<&TrailPoint> {
        self.slots.get(i)
    }

    /// Slots ordered newest first
    pub fn points(&self) -> &[TrailPoint] {
        &self.slots
    }

    /// Shift every slot back by one and write `x` into slot 0
    pub fn record(&mut self, x: NVec3, scale: f64) {
        let n = self.slots.len();
        if n == 0 {
            return;
        }
        let before = n;

        // slot i takes slot i-1, back to front
        for i in (1..n).rev() {
            self.slots[i] = self.slots[i - 1];
        }
        self.slots[0] = TrailPoint { x, scale };

        debug_assert_eq!(self.slots.len(), before, "trail length drifted");
    }
}
