//! Procedural UV-sphere generation
//!
//! The build runs as a fixed pipeline over one [`MeshBuffer`]:
//!
//! 1. angular sample tables shared by every ring
//! 2. interior rings, south to north, each followed by its seam vertex
//! 3. the south and north pole vertices
//! 4. quad strips plus one triangle fan per pole
//!
//! Vertex layout: ring `iz` (1-based) occupies
//! `[(iz-1)*(radial+1), iz*(radial+1))`, then the south pole, then the north
//! pole.

mod indices;
mod poles;
mod rings;
mod seam;
mod tables;

use tables::SampleTable;

use tracing::{debug, warn};

use crate::buffer::MeshBuffer;
use crate::descriptor::MeshDescriptor;
use crate::error::Result;

/// Regenerate `mesh` from `desc`, reusing its allocations.
///
/// The descriptor is validated first; on failure `mesh` is left untouched.
pub fn build_into(desc: &MeshDescriptor, mesh: &mut MeshBuffer) -> Result<()> {
    if let Err(err) = desc.validate() {
        warn!("sphere build rejected: {err}");
        return Err(err);
    }

    let vertex_count = desc.vertex_count();
    let index_count = desc.index_count();

    mesh.clear();
    mesh.reserve_exact(vertex_count, index_count);

    let table = SampleTable::new(desc.radial_samples);

    for iz in 1..desc.z_samples - 1 {
        let ring = rings::generate_ring(desc, &table, iz, mesh);
        seam::close_seam(desc, &table, &ring, mesh);
    }

    let (south, north) = poles::cap_poles(desc, mesh);
    debug_assert_eq!(south, desc.south_pole_index());
    debug_assert_eq!(north, desc.north_pole_index());

    indices::connect(desc, mesh);

    debug_assert_eq!(mesh.vertex_count(), vertex_count);
    debug_assert_eq!(mesh.index_count(), index_count);

    debug!(
        z_samples = desc.z_samples,
        radial_samples = desc.radial_samples,
        radius = desc.radius,
        texture_mode = %desc.texture_mode,
        view_inside = desc.view_inside,
        vertices = vertex_count,
        indices = index_count,
        "built sphere"
    );

    Ok(())
}
