//! Frame-rate bar graph, written as a plain-text (P3) PPM image
//!
//! Each sampled frame becomes one image row, top to bottom in run order. The
//! filled part of a row is the frame rate relative to the graph's full-scale
//! value. Runs with more samples than the image has rows are thinned by
//! repeatedly dropping every fourth sample until they fit.

use pbench_core::{BenchError, Result};
use std::io::{self, Write};

pub const GRAPH_WIDTH: usize = 400;
pub const GRAPH_HEIGHT: usize = 600;
/// Full-scale frame rate of a fixed-scale graph
pub const MAX_FRAMERATE: f64 = 100.0;

const FILL: &str = "255 255 255";
const EMPTY: &str = "0 0 0";

/// What a full-width bar stands for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphScale {
    /// A fixed frame rate, so graphs of different runs compare directly
    Fixed(f64),
    /// The highest frame rate on the graph
    Relative,
}

impl Default for GraphScale {
    fn default() -> Self {
        GraphScale::Fixed(MAX_FRAMERATE)
    }
}

/// Frame rates read back from a saved listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameRates {
    pub rates: Vec<f64>,
    /// Entries that were not finite numbers
    pub skipped: usize,
}

impl FrameRates {
    /// Parse comma-separated frame rates. A full `--:...,.--` listing as
    /// printed by `pbench run --print-frames` is accepted too.
    pub fn parse(source: &str) -> Self {
        let body = match source.find("--:") {
            Some(start) => &source[start + 3..],
            None => source,
        };
        let body = match body.find(".--") {
            Some(end) => &body[..end],
            None => body,
        };

        let mut parsed = FrameRates::default();
        for entry in body.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.parse::<f64>() {
                Ok(rate) if rate.is_finite() => parsed.rates.push(rate),
                _ => parsed.skipped += 1,
            }
        }
        parsed
    }
}

/// Drop every fourth sample, starting with the first
pub fn decimate(rates: &[f64]) -> Vec<f64> {
    rates
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 4 != 0)
        .map(|(_, &rate)| rate)
        .collect()
}

/// Thin `rates` until no more than `rows` remain
pub fn fit_rows(rates: &[f64], rows: usize) -> Vec<f64> {
    let mut fitted = rates.to_vec();
    while fitted.len() > rows {
        fitted = decimate(&fitted);
    }
    fitted
}

/// Filled pixels of a `width`-pixel bar for `rate` against `full_scale`
pub fn bar_width(rate: f64, full_scale: f64, width: usize) -> usize {
    if !(full_scale > 0.0) || !rate.is_finite() || rate <= 0.0 {
        return 0;
    }
    let filled = (rate / full_scale * width as f64).floor();
    if filled >= width as f64 {
        width
    } else {
        filled as usize
    }
}

/// A laid-out bar graph, one bar per image row
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGraph {
    width: usize,
    height: usize,
    bars: Vec<usize>,
}

impl FrameGraph {
    pub fn new(rates: &[f64], scale: GraphScale) -> Result<Self> {
        Self::with_size(rates, scale, GRAPH_WIDTH, GRAPH_HEIGHT)
    }

    pub fn with_size(rates: &[f64], scale: GraphScale, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BenchError::GraphError(format!(
                "graph size must be non-zero, got {width}x{height}"
            )));
        }
        if let GraphScale::Fixed(full_scale) = scale {
            if !(full_scale > 0.0) || !full_scale.is_finite() {
                return Err(BenchError::GraphError(format!(
                    "full-scale frame rate must be positive, got {full_scale}"
                )));
            }
        }

        let rows = fit_rows(rates, height);
        let full_scale = match scale {
            GraphScale::Fixed(full_scale) => full_scale,
            GraphScale::Relative => rows.iter().copied().fold(0.0, f64::max),
        };
        let bars = rows
            .iter()
            .map(|&rate| bar_width(rate, full_scale, width))
            .collect();

        Ok(Self {
            width,
            height,
            bars,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Filled pixels per row, one entry per plotted sample
    pub fn bars(&self) -> &[usize] {
        &self.bars
    }

    /// Write the graph as a P3 image. Rows past the last sample stay empty so
    /// the image always matches its declared size.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3\n{} {}\n255", self.width, self.height)?;
        let mut line = String::with_capacity(self.width * (FILL.len() + 1));
        for row in 0..self.height {
            let filled = self.bars.get(row).copied().unwrap_or(0);
            line.clear();
            for pixel in 0..self.width {
                if pixel > 0 {
                    line.push(' ');
                }
                line.push_str(if pixel < filled { FILL } else { EMPTY });
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ppm_lines(graph: &FrameGraph) -> Vec<String> {
        let mut buf = Vec::new();
        graph.write_ppm(&mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parse_plain_and_marked_listings() {
        let plain = FrameRates::parse("64, 62.5,61\n");
        assert_eq!(plain.rates, vec![64.0, 62.5, 61.0]);
        assert_eq!(plain.skipped, 0);

        let marked = FrameRates::parse("Average framerate was: 63 frames per second.\n--:64,62.5,.--\n");
        assert_eq!(marked.rates, vec![64.0, 62.5]);
        assert_eq!(marked.skipped, 0);
    }

    #[test]
    fn parse_skips_bad_entries() {
        let parsed = FrameRates::parse("60,undefined,abc,inf,30");
        assert_eq!(parsed.rates, vec![60.0, 30.0]);
        assert_eq!(parsed.skipped, 3);
    }

    #[test]
    fn decimate_drops_every_fourth_from_first() {
        let rates: Vec<f64> = (0..9).map(f64::from).collect();
        assert_eq!(decimate(&rates), vec![1.0, 2.0, 3.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn fit_rows_thins_until_it_fits() {
        let rates: Vec<f64> = (0..1280).map(f64::from).collect();
        // 1280 -> 960 -> 720 -> 540
        let fitted = fit_rows(&rates, GRAPH_HEIGHT);
        assert_eq!(fitted.len(), 540);
        assert_eq!(fitted[0], 3.0);

        let short = vec![1.0; 10];
        assert_eq!(fit_rows(&short, GRAPH_HEIGHT), short);
    }

    #[test]
    fn bar_width_normalises_and_clamps() {
        assert_eq!(bar_width(50.0, 100.0, 400), 200);
        assert_eq!(bar_width(64.0, 100.0, 400), 256);
        assert_eq!(bar_width(33.3, 100.0, 400), 133);
        assert_eq!(bar_width(250.0, 100.0, 400), 400);
        assert_eq!(bar_width(-5.0, 100.0, 400), 0);
        assert_eq!(bar_width(10.0, 0.0, 400), 0);
    }

    #[test]
    fn fixed_and_relative_scales() {
        let rates = [25.0, 50.0];
        let fixed = FrameGraph::new(&rates, GraphScale::default()).unwrap();
        assert_eq!(fixed.bars(), &[100, 200]);

        let relative = FrameGraph::new(&rates, GraphScale::Relative).unwrap();
        assert_eq!(relative.bars(), &[200, 400]);
    }

    #[test]
    fn relative_scale_uses_plotted_peak() {
        // The 100 fps spike sits at index 0 and is dropped by thinning
        let rates = [100.0, 40.0, 40.0, 20.0, 40.0];
        let graph = FrameGraph::with_size(&rates, GraphScale::Relative, 10, 4).unwrap();
        assert_eq!(graph.bars(), &[10, 10, 5]);
    }

    #[test]
    fn ppm_header_and_rows() {
        let graph = FrameGraph::with_size(&[50.0], GraphScale::Fixed(100.0), 4, 2).unwrap();
        let lines = ppm_lines(&graph);
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "4 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3], "255 255 255 255 255 255 0 0 0 0 0 0");
        // Unused rows are padded out to the declared height
        assert_eq!(lines[4], "0 0 0 0 0 0 0 0 0 0 0 0");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn full_size_image_dimensions() {
        let rates: Vec<f64> = (0..1280).map(|i| f64::from(i % 120)).collect();
        let graph = FrameGraph::new(&rates, GraphScale::default()).unwrap();
        assert_eq!(graph.bars().len(), 540);
        let lines = ppm_lines(&graph);
        assert_eq!(lines.len(), 3 + GRAPH_HEIGHT);
        assert!(lines[3..]
            .iter()
            .all(|row| row.split(' ').count() == GRAPH_WIDTH * 3));
    }

    #[test]
    fn invalid_sizes_rejected() {
        assert!(FrameGraph::with_size(&[1.0], GraphScale::default(), 0, 10).is_err());
        assert!(FrameGraph::with_size(&[1.0], GraphScale::default(), 10, 0).is_err());
        assert!(FrameGraph::new(&[1.0], GraphScale::Fixed(0.0)).is_err());
    }
}
