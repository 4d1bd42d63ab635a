use serde::{Deserialize, Serialize};
use sketch_common::Transform;

/// Cube vertex: position and face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Axis-aligned cube centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeGeometry {
    pub size: f32,
}

impl CubeGeometry {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// 24 vertices (four per face so normals stay flat) and 36 indices,
    /// counter-clockwise when seen from outside.
    pub fn build(&self) -> (Vec<Vertex>, Vec<u16>) {
        let p = self.size * 0.5;
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([0.0, 0.0, 1.0], [[-p, -p, p], [p, -p, p], [p, p, p], [-p, p, p]]),
            ([0.0, 0.0, -1.0], [[p, -p, -p], [-p, -p, -p], [-p, p, -p], [p, p, -p]]),
            ([1.0, 0.0, 0.0], [[p, -p, p], [p, -p, -p], [p, p, -p], [p, p, p]]),
            ([-1.0, 0.0, 0.0], [[-p, -p, -p], [-p, -p, p], [-p, p, p], [-p, p, -p]]),
            ([0.0, 1.0, 0.0], [[-p, p, p], [p, p, p], [p, p, -p], [-p, p, -p]]),
            ([0.0, -1.0, 0.0], [[-p, -p, -p], [p, -p, -p], [p, -p, p], [-p, -p, p]]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = vertices.len() as u16;
            vertices.extend(corners.map(|position| Vertex { position, normal }));
            indices.extend([base, base + 1, base + 2, base + 2, base + 3, base]);
        }
        (vertices, indices)
    }
}

/// Numeric inputs of the cube's shader program.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Uniforms {
    /// Seconds of animation time.
    pub u_time: f32,
    /// Pattern size in device pixels.
    pub u_size: f32,
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    #[default]
    Double,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderMaterial {
    pub uniforms: Uniforms,
    pub side: Side,
    pub wireframe: bool,
}

impl ShaderMaterial {
    pub fn new(uniforms: Uniforms) -> Self {
        Self {
            uniforms,
            side: Side::Double,
            wireframe: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: CubeGeometry,
    pub material: ShaderMaterial,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: CubeGeometry, material: ShaderMaterial) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }
}
