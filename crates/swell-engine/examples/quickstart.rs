//! Minimal end-to-end run: a Gaussian hump relaxing on a 100×100
//! torus for 1000 steps, printing elapsed seconds and the throughput
//! estimate as `elapsed,gflops`.

use swell_engine::{InitialCondition, RunConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = RunConfig::new(100, 100, 1000);
    config.init = InitialCondition::GaussianHump {
        depth: 1.0,
        amplitude: 0.1,
        width: 8.0,
    };

    let mut sim = Simulation::new(config)?;
    let report = sim.run()?;

    println!("{},{}", report.elapsed_seconds, report.throughput_gflops);
    Ok(())
}
