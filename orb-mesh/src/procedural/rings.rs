//! Latitude ring generation

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use super::tables::SampleTable;
use crate::buffer::MeshBuffer;
use crate::descriptor::{MeshDescriptor, TextureMode};

/// Latitude parameters of one interior ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Ring {
    /// Index of the ring's first vertex
    pub start: u32,
    /// Latitude angle in (-π/2, π/2)
    pub angle_fraction: f32,
    /// `sin(angle_fraction)`, in (-1, 1)
    pub z_fraction: f32,
}

impl Ring {
    /// Latitude of interior ring `iz` (1-based)
    pub fn at(desc: &MeshDescriptor, iz: u32, start: u32) -> Self {
        let z_factor = 2.0 / (desc.z_samples - 1) as f32;
        let angle_fraction = FRAC_PI_2 * (-1.0 + z_factor * iz as f32);
        Self {
            start,
            angle_fraction,
            z_fraction: angle_fraction.sin(),
        }
    }

    /// Texture coordinate of angular sample `r` (`r == radial_samples` is the seam)
    pub fn uv(&self, mode: TextureMode, table: &SampleTable, r: usize) -> [f32; 2] {
        let radial_samples = table.len() - 1;
        match mode {
            TextureMode::Linear => [
                radial_fraction(r, radial_samples),
                0.5 * (self.z_fraction + 1.0),
            ],
            TextureMode::Projected => [
                radial_fraction(r, radial_samples),
                (FRAC_PI_2 + self.z_fraction.asin()) / PI,
            ],
            TextureMode::Polar => {
                let rho = (FRAC_PI_2 - self.angle_fraction.abs()) / PI;
                [rho * table.cos[r] + 0.5, rho * table.sin[r] + 0.5]
            }
        }
    }
}

/// `u` for the equirectangular modes; exactly 1.0 at the seam
#[inline]
fn radial_fraction(r: usize, radial_samples: usize) -> f32 {
    if r == radial_samples {
        1.0
    } else {
        r as f32 * (1.0 / radial_samples as f32)
    }
}

/// Emit the `radial_samples` distinct vertices of interior ring `iz`.
///
/// The seam duplicate is appended separately by [`super::seam::close_seam`].
pub(super) fn generate_ring(
    desc: &MeshDescriptor,
    table: &SampleTable,
    iz: u32,
    mesh: &mut MeshBuffer,
) -> Ring {
    let ring = Ring::at(desc, iz, mesh.vertex_count() as u32);

    // Work on the unit sphere; only the position sees the radius
    let slice = ring.angle_fraction.cos();
    let flip = if desc.view_inside { -1.0 } else { 1.0 };

    for r in 0..desc.radial_samples as usize {
        let unit = Vec3::new(slice * table.cos[r], slice * table.sin[r], ring.z_fraction);
        let position = unit * desc.radius;
        let normal = unit.normalize() * flip;

        let uv = ring.uv(desc.texture_mode, table, r);
        mesh.push_vertex(position, normal, uv);
    }

    ring
}
