//! Frame samples and the statistics computed from them

use serde::Serialize;

/// Parallel buffers of frame and render durations, in seconds
#[derive(Debug, Clone, Default)]
pub struct FrameSamples {
    frame: Vec<f64>,
    render: Vec<f64>,
}

impl FrameSamples {
    /// Preallocate room for `reserve` samples. Recording more than that
    /// still works but reallocates mid-run.
    pub fn with_capacity(reserve: usize) -> Self {
        Self {
            frame: Vec::with_capacity(reserve),
            render: Vec::with_capacity(reserve),
        }
    }

    pub fn push(&mut self, frame_duration: f64, render_duration: f64) {
        self.frame.push(frame_duration);
        self.render.push(render_duration);
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    pub fn frame_durations(&self) -> &[f64] {
        &self.frame
    }

    pub fn render_durations(&self) -> &[f64] {
        &self.render
    }

    /// Instantaneous frame rate of each sample
    pub fn rates(&self) -> impl Iterator<Item = f64> + '_ {
        self.frame.iter().map(|&f| 1.0 / f)
    }
}

/// Summary statistics over a set of frame samples.
///
/// Rates that cannot be computed (no samples, a non-positive mean duration, a
/// zero-length frame) are `None` rather than infinite or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameStats {
    pub samples: usize,
    pub mean_frame: Option<f64>,
    pub mean_render: Option<f64>,
    /// `1 / mean_frame`
    pub mean_fps: Option<f64>,
    /// Mean time per frame not spent rendering
    pub cpu_time: Option<f64>,
    /// Population standard deviation of the instantaneous frame rates
    /// around `mean_fps`
    pub fps_std_dev: Option<f64>,
}

impl FrameStats {
    pub fn compute(samples: &FrameSamples) -> Self {
        let mean_frame = mean(samples.frame_durations());
        let mean_render = mean(samples.render_durations());

        let mean_fps = mean_frame
            .filter(|&m| m > 0.0)
            .map(|m| 1.0 / m)
            .filter(|r| r.is_finite());

        let cpu_time = match (mean_frame, mean_render) {
            (Some(f), Some(r)) => Some(f - r),
            _ => None,
        };

        let fps_std_dev = mean_fps.and_then(|mean_rate| {
            let sum_sq: f64 = samples.rates().map(|r| (r - mean_rate).powi(2)).sum();
            let sd = (sum_sq / samples.len() as f64).sqrt();
            sd.is_finite().then_some(sd)
        });

        Self {
            samples: samples.len(),
            mean_frame,
            mean_render,
            mean_fps,
            cpu_time,
            fps_std_dev,
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
