//! Pole vertices

use glam::Vec3;

use crate::buffer::MeshBuffer;
use crate::descriptor::{MeshDescriptor, TextureMode};

/// Append the south then the north pole vertex, returning their indices
pub(super) fn cap_poles(desc: &MeshDescriptor, mesh: &mut MeshBuffer) -> (u32, u32) {
    let flip = if desc.view_inside { -1.0 } else { 1.0 };

    let (south_uv, north_uv) = match desc.texture_mode {
        TextureMode::Polar => ([0.5, 0.5], [0.5, 0.5]),
        TextureMode::Linear | TextureMode::Projected => ([0.5, 0.0], [0.5, 1.0]),
    };

    let south = mesh.push_vertex(
        Vec3::new(0.0, 0.0, -desc.radius),
        Vec3::new(0.0, 0.0, -flip),
        south_uv,
    );
    let north = mesh.push_vertex(
        Vec3::new(0.0, 0.0, desc.radius),
        Vec3::new(0.0, 0.0, flip),
        north_uv,
    );

    (south, north)
}
