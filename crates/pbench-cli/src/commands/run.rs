//! Benchmark run command

use anyhow::{Context, Result};
use pbench_core::SimConfig;
use pbench_render::InstanceRecorder;
use pbench_runtime::{Benchmark, OutputFormat, Report, RunProfile};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct RunArgs {
    pub profile: Option<String>,
    pub print_frames: bool,
    pub format: Option<OutputFormat>,
    pub fixed_dt: Option<f64>,
    pub render_dt: Option<f64>,
    pub quiet: bool,
    pub frames_out: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> Result<()> {
    let profile = resolve_profile(&args)?;
    let config = SimConfig::default();

    let clock = profile.clock().context("Failed to set up frame clock")?;
    if profile.is_deterministic() && !profile.quiet {
        eprintln!("[bench] using synthetic frame clock");
    }

    let renderer = InstanceRecorder::with_capacity(config.capacity);
    let mut bench = Benchmark::new(config, clock, renderer)
        .context("Benchmark configuration rejected")?
        .quiet(profile.quiet);
    let report = bench.run().context("Benchmark run failed")?;

    if let Some(path) = &profile.frames_out {
        save_frame_rates(&report, path)?;
        if !profile.quiet {
            eprintln!(
                "[bench] saved {} frame rates to {}",
                report.frame_rates.len(),
                path.display()
            );
        }
    }
    emit(&report, &profile)
}

/// Profile file first, then command-line flags on top
fn resolve_profile(args: &RunArgs) -> Result<RunProfile> {
    let mut profile = match &args.profile {
        Some(path) => RunProfile::load(Path::new(path))
            .with_context(|| format!("Failed to load run profile '{}'", path))?,
        None => RunProfile::default(),
    };

    if args.print_frames {
        profile.print_frames = true;
    }
    if let Some(format) = args.format {
        profile.format = format;
    }
    if let Some(dt) = args.fixed_dt {
        profile.fixed_frame_dt = Some(dt);
        profile.fixed_render_dt = args.render_dt;
    }
    if args.quiet {
        profile.quiet = true;
    }
    if let Some(path) = &args.frames_out {
        profile.frames_out = Some(path.clone());
    }

    profile.validate().context("Invalid run options")?;
    Ok(profile)
}

fn save_frame_rates(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create frames file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    report.write_frame_rates(&mut out)?;
    out.flush()?;
    Ok(())
}

fn emit(report: &Report, profile: &RunProfile) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match profile.format {
        OutputFormat::Text => report.write_text(&mut out, profile.print_frames)?,
        OutputFormat::Json => {
            let json = report
                .to_json(profile.print_frames)
                .context("Failed to serialize report")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RunArgs {
        RunArgs {
            profile: None,
            print_frames: false,
            format: None,
            fixed_dt: None,
            render_dt: None,
            quiet: false,
            frames_out: None,
        }
    }

    #[test]
    fn defaults_use_wall_clock() {
        let profile = resolve_profile(&args()).unwrap();
        assert!(!profile.is_deterministic());
        assert_eq!(profile.format, OutputFormat::Text);
    }

    #[test]
    fn flags_override_profile() {
        let profile = resolve_profile(&RunArgs {
            print_frames: true,
            format: Some(OutputFormat::Json),
            fixed_dt: Some(0.01),
            quiet: true,
            frames_out: Some(PathBuf::from("frames.dat")),
            ..args()
        })
        .unwrap();
        assert!(profile.print_frames);
        assert_eq!(profile.frames_out, Some(PathBuf::from("frames.dat")));
        assert_eq!(profile.format, OutputFormat::Json);
        assert_eq!(profile.fixed_frame_dt, Some(0.01));
        assert!(profile.quiet);
    }

    #[test]
    fn invalid_fixed_dt_rejected() {
        let result = resolve_profile(&RunArgs {
            fixed_dt: Some(0.0),
            ..args()
        });
        assert!(result.is_err());
    }

    #[test]
    fn missing_profile_file_reported() {
        let err = resolve_profile(&RunArgs {
            profile: Some("/nonexistent/run.toml".into()),
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/run.toml"));
    }

    #[test]
    fn frame_rates_saved_to_file() {
        let dir = std::env::temp_dir().join(format!("pbench-frames-{}", std::process::id()));
        let path = dir.join("nested").join("frames.dat");
        let report = Report {
            frames: 3,
            run_time: 25.0,
            stats: pbench_runtime::FrameStats::compute(&pbench_runtime::FrameSamples::default()),
            particles_spawned: 0,
            particles_alive: 0,
            frame_rates: vec![64.0, 60.5],
        };

        save_frame_rates(&report, &path).unwrap();
        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "64,60.5\n");
        assert_eq!(pbench_runtime::FrameRates::parse(&saved).rates, vec![64.0, 60.5]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
