//! Orb: parametric UV-sphere tessellation
//!
//! Builds position, normal and texture-coordinate buffers plus a triangle
//! index buffer for a closed sphere from a handful of parameters:
//!
//! ```
//! use orb_mesh::{MeshDescriptor, Sphere, TextureMode, VertexAttribute};
//!
//! let mut sky = Sphere::new(MeshDescriptor::new(16, 32, 100.0, TextureMode::Polar))?;
//! sky.descriptor_mut().view_inside = true;
//! sky.rebuild()?;
//!
//! let mesh = sky.mesh();
//! assert_eq!(mesh.vertex_count(), 14 * 33 + 2);
//! let positions: &[u8] = mesh.attribute_bytes(VertexAttribute::Position);
//! assert_eq!(positions.len(), mesh.vertex_count() * 12);
//! # Ok::<(), orb_mesh::MeshError>(())
//! ```
//!
//! Building is synchronous and allocation-bounded by the descriptor. Separate
//! [`Sphere`] values can be built on separate threads; a single sphere needs
//! `&mut` access to rebuild, so readers and rebuilds never overlap.

pub mod buffer;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod packing;
pub mod procedural;
pub mod sphere;

pub use buffer::{MAX_U16_INDEX, MeshBuffer, VertexAttribute};
pub use config::{ConfigError, Manifest, SphereEntry, load_manifest, parse_manifest};
pub use descriptor::{MeshDescriptor, TextureMode};
pub use error::{MeshError, Result};
pub use packing::{FORMAT_NORMAL, FORMAT_UV, vertex_stride, vertex_stride_packed};
pub use procedural::build_into;
pub use sphere::{Sphere, build};
