//! Headless render adapter that packs instance data as if for GPU upload

use crate::adapter::RenderAdapter;
use crate::instance::CubeInstance;
use crate::mesh::unit_cube;
use pbench_core::Result;

/// Records every frame's cube instances into a reusable buffer.
///
/// Stands in for a windowed renderer when the benchmark runs headless: the
/// mesh is "uploaded" once, and each frame rebuilds the instance buffer the
/// way an instanced draw would.
pub struct InstanceRecorder {
    mesh_bytes: Vec<u8>,
    index_count: usize,
    /// Pre-allocated instance buffer, cleared every frame
    instances: Vec<CubeInstance>,
    frames_submitted: u64,
    cubes_drawn: u64,
    peak_instances: usize,
}

impl InstanceRecorder {
    pub fn new() -> Self {
        let mesh = unit_cube();
        Self {
            mesh_bytes: mesh.vertex_bytes().to_vec(),
            index_count: mesh.indices.len(),
            instances: Vec::new(),
            frames_submitted: 0,
            cubes_drawn: 0,
            peak_instances: 0,
        }
    }

    /// Reserve room for `count` instances up front
    pub fn with_capacity(count: usize) -> Self {
        let mut recorder = Self::new();
        recorder.instances.reserve(count);
        recorder
    }

    pub fn mesh_bytes(&self) -> &[u8] {
        &self.mesh_bytes
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Instances of the most recent frame
    pub fn instances(&self) -> &[CubeInstance] {
        &self.instances
    }

    /// The most recent frame's instances as raw bytes
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }

    pub fn cubes_drawn(&self) -> u64 {
        self.cubes_drawn
    }

    /// Largest instance count seen in a single frame
    pub fn peak_instances(&self) -> usize {
        self.peak_instances
    }
}

impl Default for InstanceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderAdapter for InstanceRecorder {
    fn begin_frame(&mut self) -> Result<()> {
        self.instances.clear();
        Ok(())
    }

    fn draw_cube(&mut self, instance: &CubeInstance) {
        self.instances.push(*instance);
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames_submitted += 1;
        self.cubes_drawn += self.instances.len() as u64;
        self.peak_instances = self.peak_instances.max(self.instances.len());
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::render_particles;
    use pbench_core::Vec3;
    use pbench_sim::Particle;

    fn particle(x: f64, radius: f64) -> Particle {
        Particle {
            position: Vec3::new(x, 1.0, 60.0),
            velocity: Vec3::ZERO,
            radius,
            life: 1.0,
            alive: true,
        }
    }

    #[test]
    fn mesh_uploaded_once() {
        let recorder = InstanceRecorder::new();
        assert_eq!(recorder.mesh_bytes().len(), 24 * 24);
        assert_eq!(recorder.index_count(), 36);
        assert_eq!(recorder.frames_submitted(), 0);
    }

    #[test]
    fn frames_replace_instances() {
        let mut recorder = InstanceRecorder::with_capacity(8);
        let first = [particle(0.0, 0.5), particle(1.0, 0.5), particle(2.0, 0.5)];
        let second = [particle(5.0, 1.0)];

        render_particles(&mut recorder, &first).unwrap();
        assert_eq!(recorder.instances().len(), 3);
        assert_eq!(recorder.instance_bytes().len(), 3 * 16);

        render_particles(&mut recorder, &second).unwrap();
        assert_eq!(recorder.instances().len(), 1);
        assert_eq!(recorder.instances()[0].translation(), [5.0, 1.0, -60.0]);
        assert_eq!(recorder.instances()[0].scale(), 2.0);

        assert_eq!(recorder.frames_submitted(), 2);
        assert_eq!(recorder.cubes_drawn(), 4);
        assert_eq!(recorder.peak_instances(), 3);
    }
}
