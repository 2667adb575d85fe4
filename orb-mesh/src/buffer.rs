//! Output buffers of a sphere build
//!
//! Attributes are stored as tightly packed `f32` arrays so a renderer can
//! upload them without conversion; see [`MeshBuffer::attribute_bytes`].

use std::fmt;

use bytemuck::cast_slice;
use glam::Vec3;

use crate::error::{MeshError, Result};

/// Maximum index value for u16 index buffers
pub const MAX_U16_INDEX: u32 = u16::MAX as u32;

/// Named vertex attribute streams of a [`MeshBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttribute {
    /// Vertex position (f32x3)
    Position,
    /// Unit-length vertex normal (f32x3)
    Normal,
    /// First texture coordinate set (f32x2)
    TexCoord0,
}

impl VertexAttribute {
    /// All attributes, in interleaving order
    pub const ALL: [VertexAttribute; 3] = [Self::Position, Self::Normal, Self::TexCoord0];

    /// Conventional attribute name expected by renderers
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "POSITION",
            Self::Normal => "NORMAL",
            Self::TexCoord0 => "TEXCOORD0",
        }
    }

    /// Number of f32 components per vertex
    pub const fn components(self) -> usize {
        match self {
            Self::Position | Self::Normal => 3,
            Self::TexCoord0 => 2,
        }
    }

    /// Look an attribute up by its conventional name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }
}

impl fmt::Display for VertexAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generated sphere geometry (unpacked f32 attributes + u32 indices)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Unit-length vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates, each component in [0, 1]
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty mesh data with room for the given vertex and index counts
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Drop all contents, keeping the allocations
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Ensure room for the given totals without reallocating mid-build
    pub(crate) fn reserve_exact(&mut self, vertices: usize, indices: usize) {
        self.positions.reserve_exact(vertices);
        self.normals.reserve_exact(vertices);
        self.uvs.reserve_exact(vertices);
        self.indices.reserve_exact(indices);
    }

    /// Append a vertex and return its index
    pub(crate) fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push(uv);
        index
    }

    /// Append one triangle
    pub(crate) fn push_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Flat f32 view of one attribute stream
    pub fn attribute(&self, attribute: VertexAttribute) -> &[f32] {
        match attribute {
            VertexAttribute::Position => cast_slice(self.positions.as_slice()),
            VertexAttribute::Normal => cast_slice(self.normals.as_slice()),
            VertexAttribute::TexCoord0 => cast_slice(self.uvs.as_slice()),
        }
    }

    /// Raw byte view of one attribute stream (no copy)
    pub fn attribute_bytes(&self, attribute: VertexAttribute) -> &[u8] {
        cast_slice(self.attribute(attribute))
    }

    /// Raw byte view of the u32 index buffer (no copy)
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(self.indices.as_slice())
    }

    /// Narrow the indices for 16-bit index pipelines
    pub fn indices_u16(&self) -> Result<Vec<u16>> {
        self.indices
            .iter()
            .map(|&index| {
                u16::try_from(index).map_err(|_| MeshError::IndexOverflow {
                    index,
                    max: MAX_U16_INDEX,
                })
            })
            .collect()
    }

    /// Axis-aligned bounds of all positions, `None` when empty
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.positions.iter().map(|p| Vec3::from_array(*p));
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}
