//! Interleaved vertex layouts for GPU upload
//!
//! A [`MeshBuffer`] keeps each attribute in its own f32 stream. Renderers that
//! want a single interleaved vertex buffer can ask for one of two layouts:
//! - unpacked: position f32x3, UV f32x2, normal f32x3
//! - packed: position f16x4, UV unorm16x2, normal octahedral u32
//!
//! Attribute order is always position, UV, normal. Position is mandatory.

use bytemuck::cast_slice;
use glam::{Vec2, Vec3};
use half::f16;

use crate::buffer::MeshBuffer;

// ============================================================================
// Vertex Format Constants
// ============================================================================

/// Vertex format flag: has UV coordinates
pub const FORMAT_UV: u8 = 1;
/// Vertex format flag: has normals
pub const FORMAT_NORMAL: u8 = 4;
/// Every flag this crate understands
pub const FORMAT_ALL: u8 = FORMAT_UV | FORMAT_NORMAL;

/// Bytes contributed by `flag` when it is set in `format`
const fn flag_bytes(format: u8, flag: u8, bytes: u32) -> u32 {
    if format & flag != 0 { bytes } else { 0 }
}

/// Bytes per vertex in the f32 layout (position f32x3, UV f32x2, normal f32x3)
#[inline]
pub const fn vertex_stride(format: u8) -> u32 {
    12 + flag_bytes(format, FORMAT_UV, 8) + flag_bytes(format, FORMAT_NORMAL, 12)
}

/// Bytes per vertex in the packed layout (position f16x4, UV unorm16x2, normal u32)
#[inline]
pub const fn vertex_stride_packed(format: u8) -> u32 {
    8 + flag_bytes(format, FORMAT_UV, 4) + flag_bytes(format, FORMAT_NORMAL, 4)
}

/// Layout name as used on the command line (`pos`, `pos_uv`, `pos_normal`, `pos_uv_normal`)
pub const fn format_name(format: u8) -> &'static str {
    match format & FORMAT_ALL {
        0 => "pos",
        FORMAT_UV => "pos_uv",
        FORMAT_NORMAL => "pos_normal",
        _ => "pos_uv_normal",
    }
}

/// Parse a layout name (case-insensitive)
pub fn parse_format(name: &str) -> Option<u8> {
    match name.to_ascii_lowercase().as_str() {
        "pos" => Some(0),
        "pos_uv" => Some(FORMAT_UV),
        "pos_normal" => Some(FORMAT_NORMAL),
        "pos_uv_normal" => Some(FORMAT_UV | FORMAT_NORMAL),
        _ => None,
    }
}

// ============================================================================
// Attribute Packing
// ============================================================================

/// Position as f16x4 with `w = 1`
#[inline]
pub fn pack_position_f16(position: [f32; 3]) -> [f16; 4] {
    let [x, y, z] = position.map(f16::from_f32);
    [x, y, z, f16::ONE]
}

/// UV as unorm16x2, clamped to [0, 1]
#[inline]
pub fn pack_uv_unorm16(uv: [f32; 2]) -> [u16; 2] {
    uv.map(|c| (c.clamp(0.0, 1.0) * 65535.0).round() as u16)
}

/// `+1` for non-negative components, `-1` otherwise
#[inline]
fn sign_not_zero(v: Vec2) -> Vec2 {
    Vec2::select(v.cmpge(Vec2::ZERO), Vec2::ONE, Vec2::NEG_ONE)
}

/// Reflect a point of the lower octahedron half across the diagonals
#[inline]
fn fold(oct: Vec2) -> Vec2 {
    (Vec2::ONE - Vec2::new(oct.y, oct.x).abs()) * sign_not_zero(oct)
}

#[inline]
fn to_snorm16(c: f32) -> u32 {
    (c.clamp(-1.0, 1.0) * 32767.0).round() as i16 as u16 as u32
}

#[inline]
fn from_snorm16(bits: u32) -> f32 {
    f32::from(bits as u16 as i16) / 32767.0
}

/// Normal as two snorm16 octahedral coordinates, `u` in the low half.
///
/// Zero or non-finite input packs to `0`.
pub fn pack_normal_octahedral(normal: [f32; 3]) -> u32 {
    let n = Vec3::from_array(normal);
    let l1 = n.abs().element_sum();
    if l1 == 0.0 || !l1.is_finite() {
        return 0;
    }

    let n = n / l1;
    let xy = n.truncate();
    let oct = if n.z < 0.0 { fold(xy) } else { xy };

    let [u, v] = oct.to_array().map(to_snorm16);
    u | (v << 16)
}

/// Inverse of [`pack_normal_octahedral`]; returns a unit vector (or zero)
pub fn unpack_normal_octahedral(packed: u32) -> Vec3 {
    let oct = Vec2::new(from_snorm16(packed), from_snorm16(packed >> 16));
    let z = 1.0 - oct.abs().element_sum();
    let xy = if z < 0.0 { fold(oct) } else { oct };
    xy.extend(z).normalize_or_zero()
}

// ============================================================================
// Interleaving
// ============================================================================

impl MeshBuffer {
    /// Interleave the attributes selected by `format` as raw f32
    pub fn interleave(&self, format: u8) -> Vec<u8> {
        let stride = vertex_stride(format) as usize;
        let mut out = Vec::with_capacity(self.vertex_count() * stride);

        for i in 0..self.vertex_count() {
            out.extend_from_slice(cast_slice(&self.positions[i]));
            if format & FORMAT_UV != 0 {
                out.extend_from_slice(cast_slice(&self.uvs[i]));
            }
            if format & FORMAT_NORMAL != 0 {
                out.extend_from_slice(cast_slice(&self.normals[i]));
            }
        }

        out
    }

    /// Interleave the attributes selected by `format` in the packed layout
    pub fn pack(&self, format: u8) -> Vec<u8> {
        let stride = vertex_stride_packed(format) as usize;
        let mut out = Vec::with_capacity(self.vertex_count() * stride);

        for i in 0..self.vertex_count() {
            // Position: f32x3 → f16x4
            let pos = pack_position_f16(self.positions[i]);
            out.extend_from_slice(cast_slice(&pos));

            // UV: f32x2 → unorm16x2
            if format & FORMAT_UV != 0 {
                let uv = pack_uv_unorm16(self.uvs[i]);
                out.extend_from_slice(cast_slice(&uv));
            }

            // Normal: f32x3 → octahedral u32
            if format & FORMAT_NORMAL != 0 {
                let normal = pack_normal_octahedral(self.normals[i]);
                out.extend_from_slice(&normal.to_le_bytes());
            }
        }

        out
    }
}
