//! Triangle connectivity
//!
//! Quads between neighbouring interior rings, then a fan to each pole.
//! Outward-facing triangles are CCW when viewed from outside the sphere;
//! with `view_inside` every triangle is emitted in exactly reversed order.

use crate::buffer::MeshBuffer;
use crate::descriptor::MeshDescriptor;

/// Winding-aware triangle sink
struct Winding<'a> {
    mesh: &'a mut MeshBuffer,
    inside: bool,
}

impl Winding<'_> {
    #[inline]
    fn triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        if self.inside {
            self.mesh.push_triangle(i2, i1, i0);
        } else {
            self.mesh.push_triangle(i0, i1, i2);
        }
    }
}

/// Emit the full index buffer. Vertices must already be in place.
pub(super) fn connect(desc: &MeshDescriptor, mesh: &mut MeshBuffer) {
    let ring_width = desc.ring_width() as u32;
    let radial = desc.radial_samples;
    let south = desc.south_pole_index();
    let north = desc.north_pole_index();

    let mut out = Winding {
        mesh,
        inside: desc.view_inside,
    };

    // Quad strips between interior rings
    for strip in 0..desc.ring_count().saturating_sub(1) as u32 {
        let lower = strip * ring_width;
        let upper = lower + ring_width;
        for r in 0..radial {
            let i0 = lower + r;
            let i1 = i0 + 1;
            let i2 = upper + r;
            let i3 = i2 + 1;
            out.triangle(i0, i1, i2);
            out.triangle(i1, i3, i2);
        }
    }

    // South fan on the first interior ring
    for r in 0..radial {
        out.triangle(r, south, r + 1);
    }

    // North fan on the last interior ring
    let offset = (desc.ring_count() as u32 - 1) * ring_width;
    for r in 0..radial {
        out.triangle(offset + r, offset + r + 1, north);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TextureMode;

    fn indices_of(desc: &MeshDescriptor) -> Vec<u32> {
        let mut mesh = MeshBuffer::new();
        connect(desc, &mut mesh);
        mesh.indices
    }

    #[test]
    fn test_bipyramid_has_only_fans() {
        let desc = MeshDescriptor::new(3, 6, 1.0, TextureMode::Linear);
        let indices = indices_of(&desc);
        assert_eq!(indices.len(), 36);

        // Every triangle touches exactly one pole
        for tri in indices.chunks(3) {
            let poles = tri.iter().filter(|&&i| i >= 7).count();
            assert_eq!(poles, 1, "triangle {tri:?}");
        }
    }

    #[test]
    fn test_first_quad_layout() {
        let desc = MeshDescriptor::new(4, 4, 1.0, TextureMode::Polar);
        let indices = indices_of(&desc);
        // ring 1 occupies 0..5, ring 2 occupies 5..10
        assert_eq!(&indices[0..6], &[0, 1, 5, 1, 6, 5]);
        // South fan starts after the single strip
        assert_eq!(&indices[24..27], &[0, 10, 1]);
        // North fan on ring 2
        assert_eq!(&indices[36..39], &[5, 6, 11]);
    }

    #[test]
    fn test_inside_reverses_each_triangle() {
        let outside = MeshDescriptor::new(6, 5, 1.0, TextureMode::Projected);
        let inside = outside.with_view_inside(true);
        let a = indices_of(&outside);
        let b = indices_of(&inside);
        assert_eq!(a.len(), b.len());
        for (ta, tb) in a.chunks(3).zip(b.chunks(3)) {
            assert_eq!([ta[2], ta[1], ta[0]], [tb[0], tb[1], tb[2]]);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let desc = MeshDescriptor::new(9, 13, 1.0, TextureMode::Linear);
        let indices = indices_of(&desc);
        assert_eq!(indices.len(), desc.index_count());
        let max = desc.vertex_count() as u32;
        assert!(indices.iter().all(|&i| i < max));
    }
}
