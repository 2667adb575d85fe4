//! Sphere builder owning its generated buffers

use crate::buffer::MeshBuffer;
use crate::descriptor::MeshDescriptor;
use crate::error::Result;
use crate::procedural::build_into;

/// Build a fresh mesh from `desc`
pub fn build(desc: &MeshDescriptor) -> Result<MeshBuffer> {
    let mut mesh = MeshBuffer::new();
    build_into(desc, &mut mesh)?;
    Ok(mesh)
}

/// A UV sphere: its descriptor plus the buffers generated from it.
///
/// Edit the descriptor through [`Sphere::descriptor_mut`] (for example to
/// turn on `view_inside` for a sky dome), then call [`Sphere::rebuild`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    descriptor: MeshDescriptor,
    mesh: MeshBuffer,
}

impl Sphere {
    /// Validate `descriptor` and generate the mesh
    pub fn new(descriptor: MeshDescriptor) -> Result<Self> {
        let mesh = build(&descriptor)?;
        Ok(Self { descriptor, mesh })
    }

    /// Regenerate the buffers in place from the current descriptor.
    ///
    /// Calling this twice without touching the descriptor produces identical
    /// buffers. If the descriptor is invalid the previous buffers are kept.
    pub fn rebuild(&mut self) -> Result<&mut Self> {
        build_into(&self.descriptor, &mut self.mesh)?;
        Ok(self)
    }

    /// Current descriptor
    pub fn descriptor(&self) -> &MeshDescriptor {
        &self.descriptor
    }

    /// Mutable descriptor; changes apply on the next [`Sphere::rebuild`]
    pub fn descriptor_mut(&mut self) -> &mut MeshDescriptor {
        &mut self.descriptor
    }

    /// Generated buffers
    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    /// Take ownership of the generated buffers
    pub fn into_mesh(self) -> MeshBuffer {
        self.mesh
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(MeshDescriptor::default())
            .expect("default sphere descriptor is valid")
    }
}
