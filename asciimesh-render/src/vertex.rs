//! Vertex output buffers.

/// RGB color, each channel in `0.0..=1.0`
pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0];

/// One interleaved vertex, laid out for direct upload to a vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

#[cfg(feature = "wgpu-types")]
impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];

    /// Vertex buffer layout for a wgpu pipeline drawing [`Vertex`] data
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Append-only position and color buffers kept in lockstep.
///
/// Vertex `n` owns `positions[2n..2n + 2]` and `colors[3n..3n + 3]`. The
/// consumer is expected to [`clear`](Self::clear) the buffers before each frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffers {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl VertexBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one vertex
    pub fn push(&mut self, x: f32, y: f32, color: Color) {
        self.positions.extend_from_slice(&[x, y]);
        self.colors.extend_from_slice(&color);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `x, y` pairs
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `r, g, b` triples
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Option<[f32; 2]> {
        let p = self.positions.get(2 * index..2 * index + 2)?;
        Some([p[0], p[1]])
    }

    pub fn color(&self, index: usize) -> Option<Color> {
        let c = self.colors.get(3 * index..3 * index + 3)?;
        Some([c[0], c[1], c[2]])
    }

    /// Drop all vertices, keeping the allocations for the next frame
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    /// Interleave the two buffers into [`Vertex`] values
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .chunks_exact(2)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| Vertex {
                position: [p[0], p[1]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }

    /// Interleaved vertices as raw bytes, ready for a GPU buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}
