use thiserror::Error;

/// Reasons a scenario is refused before the simulation starts
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("body {index} mass {mass} must be positive and finite")]
    InvalidMass { index: usize, mass: f64 },
    #[error("body {index} radius {radius} must be positive and finite")]
    InvalidRadius { index: usize, radius: f64 },
    #[error("body {index} field `{field}` must have 3 finite components, got {actual:?}")]
    MalformedVector { index: usize, field: &'static str, actual: Vec<f64> },
    #[error("body {index} has a pitch or duration but no note")]
    PitchWithoutNote { index: usize },
    #[error("body {index} note duration {duration} must be positive and finite")]
    InvalidDuration { index: usize, duration: f64 },
    #[error("bodies {first} and {second} are both anchors, at most one is allowed")]
    MultipleAnchors { first: usize, second: usize },
    #[error("anchor body {index} must start at rest")]
    MovingAnchor { index: usize },
    #[error("time step {0} must be positive and finite")]
    InvalidTimeStep(f64),
    #[error("trail depth must be at least {min}, got {actual}")]
    TrailTooShort { min: usize, actual: usize },
    #[error("minimum pair distance {0} must be positive and finite")]
    InvalidMinDistance(f64),
    #[error("velocity clamp {0} must be positive")]
    InvalidVelocityClamp(f64),
    #[error("damping radius {radius} must be positive and factor {factor} within [0, 1]")]
    InvalidDamping { radius: f64, factor: f64 },
    #[error("short gate threshold {short_ms} ms exceeds long threshold {long_ms} ms")]
    InvalidGate { short_ms: u64, long_ms: u64 },
    #[error("emphasis scale {0} must be positive")]
    InvalidEmphasis(f64),
}
