//! ParticleBench Runtime - the measured frame loop
//!
//! Provides the pieces that turn a simulation into a performance report:
//! - `FrameClock`: wall-clock or synthetic timestamps within a frame
//! - `Collector`: warm-up / sampling / complete phases over the run
//! - `FrameStats`: mean frame rate, non-render time, frame-rate deviation
//! - `Report`: the benchmark's output, as text or JSON
//! - `Benchmark`: drives simulation, rendering and collection frame by frame
//! - `RunProfile`: optional TOML file with output and clock options
//! - `FrameGraph`: PPM bar graph of a run's sampled frame rates

mod clock;
mod collector;
mod graph;
mod profile;
mod report;
mod runner;
mod stats;

pub use clock::{FrameClock, FrameMark, SyntheticClock, WallClock};
pub use collector::{Collector, Phase};
pub use graph::{
    bar_width, decimate, fit_rows, FrameGraph, FrameRates, GraphScale, GRAPH_HEIGHT, GRAPH_WIDTH,
    MAX_FRAMERATE,
};
pub use profile::{OutputFormat, RunProfile};
pub use report::Report;
pub use runner::Benchmark;
pub use stats::{FrameSamples, FrameStats};
