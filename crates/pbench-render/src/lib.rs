//! ParticleBench Render - the drawing seam of the benchmark
//!
//! The benchmark does not own a window or a graphics API. It hands each live
//! particle to a [`RenderAdapter`] as a transformed unit cube:
//! - `CubeVertex` / `unit_cube`: the 24-vertex quad cube every particle is drawn with
//! - `CubeInstance`: per-particle translate + uniform scale, GPU-layout packed
//! - `InstanceRecorder`: headless adapter that packs and "uploads" instance data

mod adapter;
mod instance;
mod mesh;
mod recorder;

pub use adapter::{render_particles, RenderAdapter};
pub use instance::CubeInstance;
pub use mesh::{unit_cube, CubeMesh, CubeVertex};
pub use recorder::InstanceRecorder;
