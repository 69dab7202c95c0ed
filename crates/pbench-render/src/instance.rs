//! Per-particle cube transform, packed for instanced drawing

use bytemuck::{Pod, Zeroable};
use pbench_sim::Particle;

/// Translation and uniform scale of one particle's cube.
/// 16 bytes: xyz = translation, w = scale.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    pub translate_scale: [f32; 4],
}

impl CubeInstance {
    /// Depth is negated for a view looking down -z. The cube is scaled
    /// uniformly by the particle's diameter.
    pub fn from_particle(p: &Particle) -> Self {
        let scale = (p.radius * 2.0) as f32;
        Self {
            translate_scale: [
                p.position.x as f32,
                p.position.y as f32,
                -p.position.z as f32,
                scale,
            ],
        }
    }

    pub fn translation(&self) -> [f32; 3] {
        [
            self.translate_scale[0],
            self.translate_scale[1],
            self.translate_scale[2],
        ]
    }

    pub fn scale(&self) -> f32 {
        self.translate_scale[3]
    }
}
