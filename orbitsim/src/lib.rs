pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, Color, NVec3, SonificationTag};
pub use simulation::forces::{Acceleration, AccelSet, PairwiseGravity, correct_anchor_frame};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::params::{Parameters, VelocityClamp, BoundaryDamping, ApoapsisAudio};
pub use simulation::trail::{TrailBuffer, TrailPoint};
pub use simulation::apoapsis::{
    AudioEvent, Clock, SystemClock, ManualClock, Acceptance, TimestampAcceptance, RandomAcceptance,
    ApoapsisGate, GateState, ApoapsisDetector, is_turning_point,
};
pub use simulation::engine::{Simulation, TickOutput, RenderSnapshot, BodySnapshot, TrailSnapshot};

pub use configuration::config::{ScenarioConfig, EngineConfig, SafeguardsConfig, DampingConfig, AudioConfig, BodyConfig};
pub use configuration::error::ConfigError;

pub use benchmark::benchmark::bench_tick;
