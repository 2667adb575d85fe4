//! Sphere descriptor and texture projection modes
//!
//! A [`MeshDescriptor`] fully determines the generated mesh. All buffer sizes
//! and pole indices are derived from it here, once, so the generators never
//! have to track them through a write cursor.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};

/// Default number of latitude rings (poles included)
pub const DEFAULT_Z_SAMPLES: u32 = 8;
/// Default number of angular subdivisions per ring
pub const DEFAULT_RADIAL_SAMPLES: u32 = 8;
/// Default sphere radius
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Smallest accepted `z_samples` / `radial_samples`
pub const MIN_SAMPLES: u32 = 3;

// ============================================================================
// Texture Mode
// ============================================================================

/// How texture coordinates are laid out over the sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextureMode {
    /// Equirectangular, `v` linear in the ring height
    Linear,
    /// Equirectangular, `v` linear in the latitude angle
    Projected,
    /// Each ring maps to a concentric circle around the texture centre
    #[default]
    Polar,
}

impl TextureMode {
    /// All modes, in tag order
    pub const ALL: [TextureMode; 3] = [Self::Linear, Self::Projected, Self::Polar];

    /// Lowercase name used in manifests and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Projected => "projected",
            Self::Polar => "polar",
        }
    }
}

impl fmt::Display for TextureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextureMode {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "projected" => Ok(Self::Projected),
            "polar" => Ok(Self::Polar),
            _ => Err(MeshError::UnsupportedTextureMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for TextureMode {
    type Error = MeshError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TextureMode> for String {
    fn from(mode: TextureMode) -> Self {
        mode.name().to_string()
    }
}

/// Numeric tags: 0 = linear, 1 = projected, 2 = polar
impl TryFrom<u8> for TextureMode {
    type Error = MeshError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| MeshError::UnsupportedTextureMode(format!("tag {tag}")))
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// Input parameters of a sphere build
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshDescriptor {
    /// Number of latitude rings, both poles included (>= 3)
    #[serde(default = "default_z_samples")]
    pub z_samples: u32,
    /// Angular subdivisions per ring (>= 3)
    #[serde(default = "default_radial_samples")]
    pub radial_samples: u32,
    /// Sphere radius (> 0)
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Texture coordinate layout
    #[serde(default)]
    pub texture_mode: TextureMode,
    /// Inward-facing normals and winding, for sky domes
    #[serde(default)]
    pub view_inside: bool,
}

fn default_z_samples() -> u32 {
    DEFAULT_Z_SAMPLES
}
fn default_radial_samples() -> u32 {
    DEFAULT_RADIAL_SAMPLES
}
fn default_radius() -> f32 {
    DEFAULT_RADIUS
}

impl Default for MeshDescriptor {
    fn default() -> Self {
        Self {
            z_samples: DEFAULT_Z_SAMPLES,
            radial_samples: DEFAULT_RADIAL_SAMPLES,
            radius: DEFAULT_RADIUS,
            texture_mode: TextureMode::default(),
            view_inside: false,
        }
    }
}

impl MeshDescriptor {
    /// Create a descriptor with outward-facing normals
    pub fn new(
        z_samples: u32,
        radial_samples: u32,
        radius: f32,
        texture_mode: TextureMode,
    ) -> Self {
        Self {
            z_samples,
            radial_samples,
            radius,
            texture_mode,
            view_inside: false,
        }
    }

    /// Builder-style setter for [`MeshDescriptor::view_inside`]
    pub fn with_view_inside(mut self, view_inside: bool) -> Self {
        self.view_inside = view_inside;
        self
    }

    /// Check every field. Nothing is allocated before this passes.
    pub fn validate(&self) -> Result<()> {
        if self.z_samples < MIN_SAMPLES {
            return Err(MeshError::invalid(
                "z_samples",
                format!("must be >= {MIN_SAMPLES}, got {}", self.z_samples),
            ));
        }
        if self.radial_samples < MIN_SAMPLES {
            return Err(MeshError::invalid(
                "radial_samples",
                format!("must be >= {MIN_SAMPLES}, got {}", self.radial_samples),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::invalid(
                "radius",
                format!("must be a finite value > 0, got {}", self.radius),
            ));
        }

        // Every vertex must be addressable by a u32 index
        let rings = u64::from(self.z_samples - 2);
        let ring_width = u64::from(self.radial_samples) + 1;
        let vertices = rings * ring_width + 2;
        if vertices > u64::from(u32::MAX) {
            return Err(MeshError::invalid(
                "z_samples",
                format!("{vertices} vertices exceed the 32-bit index range"),
            ));
        }

        Ok(())
    }

    /// Number of interior (non-pole) rings
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.z_samples.saturating_sub(2) as usize
    }

    /// Vertices per interior ring, seam duplicate included
    #[inline]
    pub fn ring_width(&self) -> usize {
        self.radial_samples as usize + 1
    }

    /// `(z_samples - 2) * (radial_samples + 1) + 2`
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ring_count() * self.ring_width() + 2
    }

    /// Index of the south pole vertex
    #[inline]
    pub fn south_pole_index(&self) -> u32 {
        (self.vertex_count() - 2) as u32
    }

    /// Index of the north pole vertex
    #[inline]
    pub fn north_pole_index(&self) -> u32 {
        (self.vertex_count() - 1) as u32
    }

    /// Vertex index range occupied by interior ring `iz` (1-based, `1..=z_samples-2`).
    ///
    /// `None` for the pole rows and anything past them.
    pub fn ring_range(&self, iz: u32) -> Option<Range<usize>> {
        let ring = iz.checked_sub(1)? as usize;
        if ring >= self.ring_count() {
            return None;
        }
        let start = ring * self.ring_width();
        Some(start..start + self.ring_width())
    }

    /// Exact number of indices emitted: middle quad strips plus both pole fans
    #[inline]
    pub fn index_count(&self) -> usize {
        let radial = self.radial_samples as usize;
        let strips = self.ring_count().saturating_sub(1);
        6 * strips * radial + 3 * radial + 3 * radial
    }

    /// Upper bound `6 * (z_samples - 2) * radial_samples`, for callers that
    /// preallocate index storage before building
    #[inline]
    pub fn index_capacity(&self) -> usize {
        6 * self.ring_count() * self.radial_samples as usize
    }

    /// Number of triangles emitted
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }
}
