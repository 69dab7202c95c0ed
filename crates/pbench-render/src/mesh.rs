//! Unit cube mesh shared by every particle

use bytemuck::{Pod, Zeroable};

/// A vertex with position and face normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// A cube drawn as six quads, plus triangle indices for APIs without quads
pub struct CubeMesh {
    pub vertices: [CubeVertex; 24],
    pub indices: Vec<u32>,
}

impl CubeMesh {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Build the cube spanning `[-1, 1]` on every axis.
///
/// Faces are emitted front, back, top, bottom, right, left, four vertices
/// each in quad order.
pub fn unit_cube() -> CubeMesh {
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
        ),
        (
            [0.0, 1.0, 0.0],
            [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
        ),
    ];

    let mut vertices = [CubeVertex::zeroed(); 24];
    for (face, (normal, corners)) in faces.iter().enumerate() {
        for (i, position) in corners.iter().enumerate() {
            vertices[face * 4 + i] = CubeVertex {
                position: *position,
                normal: *normal,
            };
        }
    }

    // Two triangles per quad
    let indices: Vec<u32> = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    CubeMesh { vertices, indices }
}
