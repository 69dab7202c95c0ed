//! ParticleBench CLI - run the particle benchmark and print its report

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{graph, info, run};
use pbench_runtime::{OutputFormat, MAX_FRAMERATE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pbench")]
#[command(about = "Particle simulation micro-benchmark with frame-timing statistics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark for its full duration and print the report
    Run {
        /// Path to a TOML run profile
        #[arg(long)]
        profile: Option<String>,

        /// Append every sampled frame rate to the report
        #[arg(long)]
        print_frames: bool,

        /// Output format (text or json)
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,

        /// Time frames with a synthetic clock of this many seconds per frame
        #[arg(long)]
        fixed_dt: Option<f64>,

        /// Render share of each synthetic frame, in seconds
        #[arg(long, requires = "fixed_dt")]
        render_dt: Option<f64>,

        /// Suppress progress lines on stderr
        #[arg(short, long)]
        quiet: bool,

        /// Save the sampled frame rates to this file (input for `graph`)
        #[arg(long)]
        frames_out: Option<PathBuf>,
    },

    /// Draw a saved frame-rate listing as a PPM bar graph
    Graph {
        /// Frames file written by `run --frames-out`, or a saved text report
        frames: PathBuf,

        /// Scale bars to the highest plotted frame rate
        #[arg(long, conflicts_with = "max_fps")]
        relative: bool,

        /// Frame rate drawn as a full-width bar
        #[arg(long, default_value_t = MAX_FRAMERATE)]
        max_fps: f64,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the built-in simulation constants
    Info {
        /// Output format (text or json)
        #[arg(long, value_parser = parse_format, default_value = "text")]
        format: OutputFormat,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            profile,
            print_frames,
            format,
            fixed_dt,
            render_dt,
            quiet,
            frames_out,
        } => run::run(run::RunArgs {
            profile,
            print_frames,
            format,
            fixed_dt,
            render_dt,
            quiet,
            frames_out,
        }),
        Commands::Graph {
            frames,
            relative,
            max_fps,
            output,
        } => graph::run(graph::GraphArgs {
            frames,
            relative,
            max_fps,
            output,
        }),
        Commands::Info { format } => info::run(format),
    }
}
