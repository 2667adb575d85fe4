//! Per-ring angular sample tables

use std::f32::consts::TAU;

/// Unit-circle samples shared by every ring
///
/// Both tables hold `radial_samples + 1` entries; the last one repeats the
/// first so the seam vertex can be generated from the same lookup.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SampleTable {
    /// `cos(2π·r / radial_samples)`
    pub cos: Vec<f32>,
    /// `sin(2π·r / radial_samples)`
    pub sin: Vec<f32>,
}

impl SampleTable {
    /// Build the tables. Callers validate `radial_samples >= 3` beforehand.
    pub fn new(radial_samples: u32) -> Self {
        let inv_radial = 1.0 / radial_samples as f32;
        let len = radial_samples as usize + 1;

        let mut cos = Vec::with_capacity(len);
        let mut sin = Vec::with_capacity(len);
        for r in 0..radial_samples {
            let angle = TAU * inv_radial * r as f32;
            cos.push(angle.cos());
            sin.push(angle.sin());
        }

        // Close the circle in angle space
        cos.push(cos[0]);
        sin.push(sin[0]);

        Self { cos, sin }
    }

    /// Number of entries (radial samples + 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.cos.len()
    }
}
