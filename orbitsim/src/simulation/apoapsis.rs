//! Apoapsis detection and the time gate in front of audio events
//!
//! A body passes an apoapsis when the squared distance from the origin one
//! tick ago is larger than both now and two ticks ago. Each detection asks
//! a shared gate whether enough wall-clock time has passed since the last
//! note; the clock and the random acceptance are injected so the gate can
//! be driven deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulation::params::ApoapsisAudio;
use crate::simulation::states::Body;

/// Audio trigger handed to the synthesizer
#[derive(Debug, Clone, PartialEq)]
pub struct AudioEvent {
    pub body: usize,
    pub note: String,
    pub pitch: i32,
    pub duration: f64,
}

/// Millisecond time source
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Monotonic milliseconds since construction
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock moved by hand; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Probabilistic check consulted inside the short window
pub trait Acceptance {
    fn accept(&mut self, now_ms: u64) -> bool;
}

impl<F> Acceptance for F
where
    F: FnMut(u64) -> bool,
{
    fn accept(&mut self, now_ms: u64) -> bool {
        self(now_ms)
    }
}

/// Accept when the timestamp is a multiple of `modulus`
pub struct TimestampAcceptance {
    pub modulus: u64,
}

impl Default for TimestampAcceptance {
    fn default() -> Self {
        Self { modulus: 3 }
    }
}

impl Acceptance for TimestampAcceptance {
    fn accept(&mut self, now_ms: u64) -> bool {
        self.modulus != 0 && now_ms % self.modulus == 0
    }
}

/// Accept with fixed probability from a seeded generator
pub struct RandomAcceptance {
    rng: StdRng,
    probability: f64,
}

impl RandomAcceptance {
    /// Non-finite probabilities never accept
    pub fn new(seed: u64, probability: f64) -> Self {
        let probability = if probability.is_finite() { probability.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability,
        }
    }
}

impl Acceptance for RandomAcceptance {
    fn accept(&mut self, _now_ms: u64) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Cooldown,
    Ready,
}

/// Rate limiter shared by every body
#[derive(Debug, Clone)]
pub struct ApoapsisGate {
    long_ms: u64,
    short_ms: u64,
    last_fired: Option<u64>,
}

impl ApoapsisGate {
    pub fn new(long_ms: u64, short_ms: u64) -> Self {
        Self { long_ms, short_ms, last_fired: None }
    }

    pub fn last_fired(&self) -> Option<u64> {
        self.last_fired
    }

    fn elapsed(&self, now_ms: u64) -> Option<u64> {
        self.last_fired.map(|last| now_ms.saturating_sub(last))
    }

    /// Unconditional state at `now_ms`, without consulting any acceptance
    pub fn state(&self, now_ms: u64) -> GateState {
        match self.elapsed(now_ms) {
            None => GateState::Ready,
            Some(elapsed) if elapsed > self.long_ms => GateState::Ready,
            Some(_) => GateState::Cooldown,
        }
    }

    /// Fire if ready; firing puts the gate back into cooldown
    /// The acceptance is only consulted between the short and the long threshold
    pub fn try_fire(&mut self, now_ms: u64, acceptance: &mut dyn Acceptance) -> bool {
        let ready = match self.state(now_ms) {
            GateState::Ready => true,
            GateState::Cooldown => {
                self.elapsed(now_ms).is_some_and(|e| e > self.short_ms) && acceptance.accept(now_ms)
            }
        };
        if ready {
            self.last_fired = Some(now_ms);
        }
        ready
    }
}

/// Local maximum of the squared radial distance
pub fn is_turning_point(current: f64, previous: f64, previous_previous: f64) -> bool {
    previous > current && previous > previous_previous
}

pub struct ApoapsisDetector {
    audio: ApoapsisAudio,
    gate: ApoapsisGate,
    clock: Box<dyn Clock>,
    acceptance: Box<dyn Acceptance>,
}

impl ApoapsisDetector {
    pub fn new(audio: ApoapsisAudio, clock: Box<dyn Clock>, acceptance: Box<dyn Acceptance>) -> Self {
        let gate = ApoapsisGate::new(audio.long_ms, audio.short_ms);
        Self {
            audio,
            gate,
            clock,
            acceptance,
        }
    }

    pub fn audio(&self) -> &ApoapsisAudio {
        &self.audio
    }

    pub fn gate(&self) -> &ApoapsisGate {
        &self.gate
    }

    /// Inspect a freshly integrated body against its not yet shifted trail
    pub fn inspect(&mut self, body: &Body) -> Option<AudioEvent> {
        if body.anchor {
            return None;
        }
        let tag = body.tag.as_ref()?;
        let previous = body.trail.get(0)?.x.norm_squared();
        let previous_previous = body.trail.get(1)?.x.norm_squared();

        if !is_turning_point(body.radial2(), previous, previous_previous) {
            return None;
        }

        let now = self.clock.now_ms();
        if !self.gate.try_fire(now, &mut *self.acceptance) {
            return None;
        }

        Some(AudioEvent {
            body: body.id,
            note: tag.note.clone(),
            pitch: tag.pitch,
            duration: tag.duration.unwrap_or(self.audio.duration),
        })
    }
}
