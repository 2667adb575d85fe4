//! Sphere manifests (`spheres.toml`)
//!
//! ```toml
//! [[sphere]]
//! name = "planet"
//! z_samples = 32
//! radial_samples = 64
//! radius = 1.0
//! texture_mode = "projected"
//!
//! [[sphere]]
//! name = "sky"
//! radius = 100.0
//! view_inside = true
//! ```
//!
//! Omitted fields take the [`MeshDescriptor`] defaults.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::descriptor::MeshDescriptor;
use crate::error::MeshError;

/// Errors from loading or validating a manifest
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The manifest file could not be read
    #[error("failed to read manifest {path:?}: {source}")]
    Io {
        /// Manifest path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or has the wrong shape
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// An entry has an invalid descriptor
    #[error("sphere {name:?}: {source}")]
    Mesh {
        /// Entry name
        name: String,
        /// Validation failure
        #[source]
        source: MeshError,
    },

    /// Two entries share a name
    #[error("duplicate sphere name {0:?}")]
    DuplicateName(String),

    /// An entry has an empty name
    #[error("sphere entry {0} has an empty name")]
    EmptyName(usize),
}

/// One named sphere in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereEntry {
    /// Unique name of the sphere
    pub name: String,
    /// Build parameters
    #[serde(flatten)]
    pub descriptor: MeshDescriptor,
}

/// A list of spheres to build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Entries in file order
    #[serde(default, rename = "sphere")]
    pub spheres: Vec<SphereEntry>,
}

impl Manifest {
    /// Check names and every descriptor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, entry) in self.spheres.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(i));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateName(entry.name.clone()));
            }
            entry
                .descriptor
                .validate()
                .map_err(|source| ConfigError::Mesh {
                    name: entry.name.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Find an entry by name
    pub fn get(&self, name: &str) -> Option<&SphereEntry> {
        self.spheres.iter().find(|entry| entry.name == name)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Parse a manifest from TOML text (no validation)
pub fn parse_manifest(content: &str) -> Result<Manifest, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a manifest file (no validation)
pub fn load_manifest(path: &Path) -> Result<Manifest, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = parse_manifest(&content)?;
    let count = manifest.spheres.len();
    info!("Loaded {count} sphere(s) from {path:?}");
    Ok(manifest)
}
