//! The simulation object and its tick
//!
//! `Simulation` owns the body registry and every trail buffer. A tick runs
//! force accumulation, anchor correction, integration, safeguards, apoapsis
//! detection and the trail shift, then hands back a read-only view.

use log::{debug, trace};

use crate::simulation::apoapsis::{ApoapsisDetector, AudioEvent, Acceptance, Clock, SystemClock, TimestampAcceptance};
use crate::simulation::forces::{correct_anchor_frame, AccelSet, PairwiseGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::safeguards::stabilize;
use crate::simulation::states::{Body, Color, NVec3};
use crate::simulation::trail::{TrailPoint, BASE_SCALE};

pub struct Simulation {
    bodies: Vec<Body>,
    parameters: Parameters,
    forces: AccelSet,
    anchor: Option<usize>,
    detector: Option<ApoapsisDetector>,
    accels: Vec<NVec3>,
    ticks: u64,
    t: f64,
}

/// Everything a tick produces
pub struct TickOutput<'a> {
    pub snapshot: RenderSnapshot<'a>,
    pub audio: Option<AudioEvent>,
}

impl Simulation {
    /// Wire up a simulation from already validated bodies
    /// Use [`Simulation::build`] to go through configuration checks
    pub(crate) fn from_parts(bodies: Vec<Body>, parameters: Parameters) -> Self {
        let anchor = bodies.iter().position(|b| b.anchor);
        let forces = AccelSet::new().with(PairwiseGravity {
            min_distance: parameters.min_distance,
        });
        let detector = parameters.apoapsis_audio.clone().map(|audio| {
            ApoapsisDetector::new(
                audio,
                Box::new(SystemClock::new()),
                Box::new(TimestampAcceptance::default()),
            )
        });
        let n = bodies.len();

        Self {
            bodies,
            parameters,
            forces,
            anchor,
            detector,
            accels: vec![NVec3::zeros(); n],
            ticks: 0,
            t: 0.0,
        }
    }

    /// Replace the gate's time source and acceptance check
    /// No effect when apoapsis audio is disabled
    pub fn with_audio_source<C, A>(mut self, clock: C, acceptance: A) -> Self
    where
        C: Clock + 'static,
        A: Acceptance + 'static,
    {
        if let Some(audio) = self.parameters.apoapsis_audio.clone() {
            self.detector = Some(ApoapsisDetector::new(audio, Box::new(clock), Box::new(acceptance)));
        }
        self
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: usize) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time, `ticks * dt`
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot { bodies: &self.bodies }
    }

    /// Advance the whole system by one fixed step
    pub fn tick(&mut self) -> TickOutput<'_> {
        let dt = self.parameters.dt;

        // Forces, then the anchor frame
        self.forces.accumulate_accels(&self.bodies, &mut self.accels);
        correct_anchor_frame(self.anchor, &mut self.accels);
        for (b, a) in self.bodies.iter_mut().zip(self.accels.iter()) {
            b.a = *a;
        }
        if let Some(k) = self.anchor {
            debug_assert!(self.bodies[k].a == NVec3::zeros(), "anchor acceleration survived correction");
        }

        semi_implicit_euler(&mut self.bodies, dt);
        stabilize(
            &mut self.bodies,
            self.parameters.velocity_clamp.as_ref(),
            self.parameters.boundary_damping.as_ref(),
        );

        // Detect on the pre-shift trail, then record
        let mut audio = None;
        for b in self.bodies.iter_mut() {
            let mut scale = BASE_SCALE;
            if audio.is_none() {
                if let Some(detector) = self.detector.as_mut() {
                    if let Some(event) = detector.inspect(b) {
                        debug!("apoapsis of body {}: {} {}", b.id, event.note, event.pitch);
                        scale = detector.audio().emphasis;
                        audio = Some(event);
                    }
                }
            }
            b.trail.record(b.x, scale);
            debug_assert_eq!(b.trail.capacity(), self.parameters.trail_depth, "trail length drifted");
        }

        self.ticks += 1;
        self.t += dt;
        trace!("tick {} t = {:.3}", self.ticks, self.t);

        TickOutput {
            snapshot: self.snapshot(),
            audio,
        }
    }

    /// Run `n` ticks, collecting the audio events they produced
    pub fn run(&mut self, n: u64) -> Vec<AudioEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            if let Some(e) = self.tick().audio {
                events.push(e);
            }
        }
        events
    }
}

/// Read-only view handed to the renderer after a tick
#[derive(Clone, Copy)]
pub struct RenderSnapshot<'a> {
    bodies: &'a [Body],
}

#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot<'a> {
    pub id: usize,
    pub x: NVec3,
    pub radius: f64,
    pub color: Color,
    trail: &'a [TrailPoint],
}

/// One drawn trail slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSnapshot {
    pub x: NVec3,
    pub scale: f64,
    pub radius: f64,
    pub color: Color,
}

impl<'a> RenderSnapshot<'a> {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> impl Iterator<Item = BodySnapshot<'a>> + 'a {
        self.bodies.iter().map(|b| BodySnapshot {
            id: b.id,
            x: b.x,
            radius: b.radius,
            color: b.color,
            trail: b.trail.points(),
        })
    }
}

impl<'a> BodySnapshot<'a> {
    /// Trail slots newest first; older slots shrink by 1% and fade 1% per slot
    pub fn trail(&self) -> impl Iterator<Item = TrailSnapshot> + 'a {
        let radius = self.radius;
        let color = self.color;
        let trail: &'a [TrailPoint] = self.trail;
        trail.iter().enumerate().map(move |(i, p)| TrailSnapshot {
            x: p.x,
            scale: p.scale,
            radius: (radius * (1.0 - 0.01 * i as f64)).max(0.0) * p.scale,
            color: color.lighten(i as f64),
        })
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}
