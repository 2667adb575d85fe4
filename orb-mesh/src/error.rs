//! Error types for sphere tessellation

/// Errors raised while validating a descriptor or converting a built mesh
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A descriptor field is out of range (checked before any allocation)
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Field name as it appears in manifests
        name: &'static str,
        /// Human-readable constraint that was violated
        reason: String,
    },

    /// A texture mode was named that is not `linear`, `projected` or `polar`
    #[error("unsupported texture mode: {0:?} (expected linear, projected or polar)")]
    UnsupportedTextureMode(String),

    /// An index does not fit the requested narrower index type
    #[error("index {index} exceeds the 16-bit index range (max {max})")]
    IndexOverflow {
        /// First offending index
        index: u32,
        /// Largest representable index
        max: u32,
    },
}

impl MeshError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MeshError>;
