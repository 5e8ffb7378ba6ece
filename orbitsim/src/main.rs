use orbitsim::{ScenarioConfig, Simulation, SystemClock, RandomAcceptance};
use orbitsim::bench_tick;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "planets.yaml")]
    file_name: String,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1200)]
    ticks: u64,

    /// Maximum tick rate, 0 runs unthrottled
    #[arg(long, default_value_t = 120.0)]
    hz: f64,

    /// Seed a random acceptance for the audio gate instead of the timestamp check
    #[arg(long)]
    seed: Option<u64>,

    /// Time the tick kernel and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_tick()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = Simulation::build(scenario_cfg).context("invalid scenario")?;
    if let Some(seed) = args.seed {
        sim = sim.with_audio_source(SystemClock::new(), RandomAcceptance::new(seed, 0.5));
    }

    // Throttle like a frame loop: sleep away what is left of each frame
    let frame = if args.hz > 0.0 {
        Some(Duration::from_secs_f64(1.0 / args.hz))
    } else {
        None
    };

    let mut notes = 0;
    for _ in 0..args.ticks {
        let started = Instant::now();

        let out = sim.tick();
        if let Some(event) = out.audio {
            notes += 1;
            info!("play {}{} for {}s (body {})", event.note, event.pitch, event.duration, event.body);
        }

        if let Some(frame) = frame {
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    println!("t = {:.1} after {} ticks, {} notes", sim.time(), sim.ticks(), notes);
    for b in sim.snapshot().bodies() {
        println!("body {:2}: x = [{:10.2}, {:10.2}, {:10.2}]", b.id, b.x.x, b.x.y, b.x.z);
    }

    Ok(())
}
