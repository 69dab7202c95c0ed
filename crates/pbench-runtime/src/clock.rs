//! Frame clocks

use pbench_core::{BenchError, Result};
use std::time::Instant;

/// The points within a frame at which the benchmark reads its clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMark {
    /// Before any simulation work
    FrameStart,
    /// After simulation, before the first draw
    RenderStart,
    /// After the frame has been submitted
    RenderEnd,
    /// End of the frame, after bookkeeping
    FrameEnd,
}

/// Source of timestamps (seconds from an arbitrary origin)
pub trait FrameClock {
    fn mark(&mut self, mark: FrameMark) -> f64;
}

impl<C: FrameClock + ?Sized> FrameClock for Box<C> {
    fn mark(&mut self, mark: FrameMark) -> f64 {
        (**self).mark(mark)
    }
}

/// Monotonic wall clock
pub struct WallClock {
    origin: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for WallClock {
    fn mark(&mut self, _mark: FrameMark) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Deterministic clock: every frame lasts `frame_dt`, the last `render_dt`
/// of which is spent rendering.
///
/// Timestamps are computed from the frame index rather than accumulated, so
/// long runs do not drift.
#[derive(Debug, Clone)]
pub struct SyntheticClock {
    frame_dt: f64,
    render_dt: f64,
    frame: u64,
}

impl SyntheticClock {
    pub fn new(frame_dt: f64, render_dt: f64) -> Result<Self> {
        if !(frame_dt > 0.0) || !frame_dt.is_finite() {
            return Err(BenchError::ProfileError(format!(
                "synthetic frame duration must be positive, got {frame_dt}"
            )));
        }
        if !(0.0..=frame_dt).contains(&render_dt) {
            return Err(BenchError::ProfileError(format!(
                "synthetic render duration {render_dt} must lie within [0, {frame_dt}]"
            )));
        }
        Ok(Self {
            frame_dt,
            render_dt,
            frame: 0,
        })
    }

    pub fn render_dt(&self) -> f64 {
        self.render_dt
    }
}

impl FrameClock for SyntheticClock {
    fn mark(&mut self, mark: FrameMark) -> f64 {
        let base = self.frame as f64 * self.frame_dt;
        match mark {
            FrameMark::FrameStart => base,
            FrameMark::RenderStart => base + (self.frame_dt - self.render_dt),
            FrameMark::RenderEnd => base + self.frame_dt,
            FrameMark::FrameEnd => {
                self.frame += 1;
                base + self.frame_dt
            }
        }
    }
}
