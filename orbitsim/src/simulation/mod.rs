pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod safeguards;
pub mod trail;
pub mod apoapsis;
pub mod scenario;
