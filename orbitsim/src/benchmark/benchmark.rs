use std::time::Instant;

use crate::configuration::config::BodyConfig;
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;

/// Helper to build descriptors for `n` bodies
/// Deterministic positions, no rand needed; body 0 is an anchor
fn make_bodies(n: usize) -> Vec<BodyConfig> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = [
            (i_f * 0.37).sin() * 1000.0,
            (i_f * 0.13).cos() * 1000.0,
            (i_f * 0.07).sin() * 1000.0,
        ];
        let body = if i == 0 {
            BodyConfig::new([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0e7, 100.0).anchored()
        } else {
            BodyConfig::new(x, [0.0, 0.0, 0.0], 10.0, 20.0)
        };
        bodies.push(body);
    }

    bodies
}

/// Time full ticks of the sonifying variant for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick() -> Result<(), ConfigError> {
    // expected scenes are 6-15 bodies, the larger n show the n^2 kernel
    let ns = [6, 15, 50, 200, 800, 1600];

    println!("N,tick_ms");

    for n in ns {
        // Small n: average over many ticks to smooth noise
        let steps = if n <= 200 { 1000 } else { 20 };

        let mut sim = Simulation::from_descriptors(Parameters::sonifying(), &make_bodies(n))?;

        // Warm up
        sim.tick();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.tick();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
