use bytemuck::{Pod, Zeroable};

/// Cube vertex: object-space position plus texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> Vertex {
    Vertex { position: [x, y, z], uv: [u, w] }
}

/// The cube: 6 faces × 2 triangles × 3 vertices, counter-clockwise when seen
/// from outside. Positions span ±1 on every axis; each face maps the full
/// [0, 1] texture square.
pub const CUBE_VERTICES: [Vertex; 36] = [
    // Bottom
    v(-1.0, -1.0, -1.0, 0.0, 0.0),
    v(1.0, -1.0, -1.0, 1.0, 0.0),
    v(-1.0, -1.0, 1.0, 0.0, 1.0),
    v(1.0, -1.0, -1.0, 1.0, 0.0),
    v(1.0, -1.0, 1.0, 1.0, 1.0),
    v(-1.0, -1.0, 1.0, 0.0, 1.0),
    // Top
    v(-1.0, 1.0, -1.0, 0.0, 0.0),
    v(-1.0, 1.0, 1.0, 0.0, 1.0),
    v(1.0, 1.0, -1.0, 1.0, 0.0),
    v(1.0, 1.0, -1.0, 1.0, 0.0),
    v(-1.0, 1.0, 1.0, 0.0, 1.0),
    v(1.0, 1.0, 1.0, 1.0, 1.0),
    // Front
    v(-1.0, -1.0, 1.0, 1.0, 0.0),
    v(1.0, -1.0, 1.0, 0.0, 0.0),
    v(-1.0, 1.0, 1.0, 1.0, 1.0),
    v(1.0, -1.0, 1.0, 0.0, 0.0),
    v(1.0, 1.0, 1.0, 0.0, 1.0),
    v(-1.0, 1.0, 1.0, 1.0, 1.0),
    // Back
    v(-1.0, -1.0, -1.0, 0.0, 0.0),
    v(-1.0, 1.0, -1.0, 0.0, 1.0),
    v(1.0, -1.0, -1.0, 1.0, 0.0),
    v(1.0, -1.0, -1.0, 1.0, 0.0),
    v(-1.0, 1.0, -1.0, 0.0, 1.0),
    v(1.0, 1.0, -1.0, 1.0, 1.0),
    // Left
    v(-1.0, -1.0, 1.0, 0.0, 1.0),
    v(-1.0, 1.0, -1.0, 1.0, 0.0),
    v(-1.0, -1.0, -1.0, 0.0, 0.0),
    v(-1.0, -1.0, 1.0, 0.0, 1.0),
    v(-1.0, 1.0, 1.0, 1.0, 1.0),
    v(-1.0, 1.0, -1.0, 1.0, 0.0),
    // Right
    v(1.0, -1.0, 1.0, 1.0, 1.0),
    v(1.0, -1.0, -1.0, 1.0, 0.0),
    v(1.0, 1.0, -1.0, 0.0, 0.0),
    v(1.0, -1.0, 1.0, 1.0, 1.0),
    v(1.0, 1.0, -1.0, 0.0, 0.0),
    v(1.0, 1.0, 1.0, 0.0, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn cube_has_36_vertices() {
        assert_eq!(CUBE_VERTICES.len(), 36);
    }

    #[test]
    fn positions_are_corners_of_the_unit_cube() {
        for vert in &CUBE_VERTICES {
            for c in vert.position {
                assert!(c == 1.0 || c == -1.0, "unexpected coordinate {c}");
            }
        }
    }

    #[test]
    fn uvs_stay_in_the_unit_square() {
        for vert in &CUBE_VERTICES {
            for c in vert.uv {
                assert!((0.0..=1.0).contains(&c), "uv component {c} out of range");
            }
        }
    }

    #[test]
    fn every_triangle_winds_counter_clockwise_from_outside() {
        // A CCW triangle (seen from outside) has its normal pointing away
        // from the cube center, i.e. dot(normal, centroid) > 0.
        for tri in CUBE_VERTICES.chunks_exact(3) {
            let [a, b, c] = [tri[0].position, tri[1].position, tri[2].position];
            let normal = cross(sub(b, a), sub(c, a));
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            assert!(
                dot(normal, centroid) > 0.0,
                "triangle {a:?} {b:?} {c:?} winds the wrong way"
            );
        }
    }

    #[test]
    fn each_face_is_planar() {
        // Triangle pairs come from the same axis-aligned face: all six
        // vertices share one constant coordinate.
        for face in CUBE_VERTICES.chunks_exact(6) {
            let shared_axis = (0..3).any(|axis| {
                let first = face[0].position[axis];
                face.iter().all(|v| v.position[axis] == first)
            });
            assert!(shared_axis, "face is not axis-aligned: {face:?}");
        }
    }

    #[test]
    fn vertex_layout_matches_struct_size() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 20); // 3 + 2 floats
        assert_eq!(layout.attributes.len(), 2);
    }
}
