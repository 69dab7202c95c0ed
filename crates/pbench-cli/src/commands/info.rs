//! Show the benchmark's built-in constants

use anyhow::{Context, Result};
use pbench_core::SimConfig;
use pbench_runtime::OutputFormat;
use serde::Serialize;

#[derive(Serialize)]
struct Info<'a> {
    config: &'a SimConfig,
    particles_per_spawn: usize,
    warmup_secs: f64,
    sample_reserve: usize,
}

pub fn run(format: OutputFormat) -> Result<()> {
    let config = SimConfig::default();
    config.validate().context("Built-in constants are inconsistent")?;

    match format {
        OutputFormat::Json => {
            let info = Info {
                config: &config,
                particles_per_spawn: config.particles_per_spawn(),
                warmup_secs: config.max_lifetime(),
                sample_reserve: config.sample_reserve(),
            };
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Text => print!("{}", describe(&config)),
    }
    Ok(())
}

fn describe(config: &SimConfig) -> String {
    let b = &config.bounds;
    let mut s = String::new();
    s.push_str(&format!("Running time:     {}s\n", config.running_time()));
    s.push_str(&format!("Warm-up:          {}s\n", config.max_lifetime()));
    s.push_str(&format!(
        "Spawn:            {} particles every {}s ({}/s)\n",
        config.particles_per_spawn(),
        config.spawn_interval,
        config.spawn_rate
    ));
    s.push_str(&format!("Pool capacity:    {}\n", config.capacity));
    s.push_str(&format!("Sample reserve:   {}\n", config.sample_reserve()));
    s.push_str(&format!(
        "Bounds:           x [{}, {}]  y [{}, {}]  z [{}, {}]\n",
        b.min.x, b.max.x, b.min.y, b.max.y, b.min.z, b.max.z
    ));
    s.push_str(&format!(
        "Gravity:          {}   Bounce: x{}   Max wind: {}\n",
        config.gravity, config.bounce, config.max_wind
    ));
    s.push_str(&format!("Seed:             {}\n", config.seed));
    s
}
