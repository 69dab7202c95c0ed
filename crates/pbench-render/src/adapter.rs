//! Render adapter trait

use crate::instance::CubeInstance;
use pbench_core::Result;
use pbench_sim::Particle;

/// Something that can draw the benchmark's particles as unit cubes.
///
/// Implementations own all graphics resources. The benchmark only supplies a
/// transform per live particle and brackets each frame with
/// `begin_frame`/`end_frame`; `end_frame` is where a windowed implementation
/// presents, so its cost counts as render time.
pub trait RenderAdapter {
    /// Called once per frame before any cube is drawn
    fn begin_frame(&mut self) -> Result<()>;

    /// Draw one unit cube with the given transform
    fn draw_cube(&mut self, instance: &CubeInstance);

    /// Submit the frame
    fn end_frame(&mut self) -> Result<()>;

    /// Human-readable name for this adapter
    fn name(&self) -> &str;
}

/// Draw every particle yielded by `particles` as one frame.
/// Returns the number of cubes drawn.
pub fn render_particles<'a, R, I>(adapter: &mut R, particles: I) -> Result<usize>
where
    R: RenderAdapter + ?Sized,
    I: IntoIterator<Item = &'a Particle>,
{
    adapter.begin_frame()?;
    let mut drawn = 0;
    for p in particles {
        adapter.draw_cube(&CubeInstance::from_particle(p));
        drawn += 1;
    }
    adapter.end_frame()?;
    Ok(drawn)
}
