//! Texture seam closure

use glam::Vec3;

use super::rings::Ring;
use super::tables::SampleTable;
use crate::buffer::MeshBuffer;
use crate::descriptor::MeshDescriptor;

/// Append the seam vertex of `ring`: geometry copied from the ring's first
/// vertex, UV taken at the wrapped angle (`u = 1.0` for the equirectangular
/// modes).
pub(super) fn close_seam(
    desc: &MeshDescriptor,
    table: &SampleTable,
    ring: &Ring,
    mesh: &mut MeshBuffer,
) -> u32 {
    let first = ring.start as usize;
    let position = Vec3::from_array(mesh.positions[first]);
    let normal = Vec3::from_array(mesh.normals[first]);
    let uv = ring.uv(desc.texture_mode, table, desc.radial_samples as usize);
    mesh.push_vertex(position, normal, uv)
}
