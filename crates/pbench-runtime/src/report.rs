//! Benchmark report and its output formats

use crate::stats::FrameStats;
use serde::Serialize;
use std::io::{self, Write};

/// Everything a finished run reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Frames run, warm-up included
    pub frames: u64,
    /// Measured run time in seconds
    pub run_time: f64,
    #[serde(flatten)]
    pub stats: FrameStats,
    /// Particles spawned over the whole run
    pub particles_spawned: usize,
    /// Particles alive when the run ended
    pub particles_alive: usize,
    /// Instantaneous frame rate of every sampled frame
    #[serde(skip)]
    pub frame_rates: Vec<f64>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame_rates: Option<&'a [f64]>,
}

impl Report {
    /// The classic three-line report. With `print_frames`, the per-sample
    /// frame rates follow between `--:` and `.--` markers.
    pub fn to_text(&self, print_frames: bool) -> String {
        let mut text = format!(
            "Average framerate was: {} frames per second.\n\
             Average cpu time was- {} seconds per frame.\n\
             The standard deviation was: {} frames per second.\n",
            display(self.stats.mean_fps),
            display(self.stats.cpu_time),
            display(self.stats.fps_std_dev)
        );
        if print_frames {
            text.push_str("--:");
            for rate in &self.frame_rates {
                text.push_str(&display(finite(*rate)));
                text.push(',');
            }
            text.push_str(".--\n");
        }
        text
    }

    pub fn write_text<W: Write>(&self, out: &mut W, print_frames: bool) -> io::Result<()> {
        out.write_all(self.to_text(print_frames).as_bytes())
    }

    /// Write the sampled frame rates as one comma-separated line, the input
    /// format of [`FrameRates::parse`](crate::FrameRates::parse)
    pub fn write_frame_rates<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let line = self
            .frame_rates
            .iter()
            .map(|rate| display(finite(*rate)))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{line}")
    }

    /// Pretty JSON; undefined statistics serialize as `null`
    pub fn to_json(&self, print_frames: bool) -> serde_json::Result<String> {
        let view = JsonReport {
            report: self,
            frame_rates: print_frames.then_some(self.frame_rates.as_slice()),
        };
        serde_json::to_string_pretty(&view)
    }
}

fn finite(rate: f64) -> Option<f64> {
    Some(rate).filter(|r| r.is_finite())
}

fn display(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }
}
