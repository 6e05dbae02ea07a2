//! Domain types for the fovgen catalogs.
//!
//! Catalog rows are parsed once at load time and read-only thereafter.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Catalog rows
// ---------------------------------------------------------------------------

/// One camera sensor from the camera catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub name: String,
    /// Photosite (pixel) edge length in micrometers.
    pub photosite_size_um: f64,
    /// Sensor width in photosites.
    pub width_photosites: i32,
    /// Sensor height in photosites.
    pub height_photosites: i32,
}

/// One telescope/optic from the optics catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpticSpec {
    pub name: String,
    /// Corrector/reducer behind the optic; empty when the optic is used bare.
    pub corrector: String,
    /// Effective focal length in millimeters.
    pub focal_length_mm: i32,
}

impl OpticSpec {
    /// Whether this entry carries a corrector/reducer.
    pub fn has_corrector(&self) -> bool {
        !self.corrector.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Angular field of view of a camera behind an optic, as half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FovResult {
    pub half_width_arcsec: i64,
    pub half_height_arcsec: i64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_corrector_on_empty_and_non_empty() {
        let bare = OpticSpec {
            name: "C8".to_string(),
            corrector: String::new(),
            focal_length_mm: 2032,
        };
        assert!(!bare.has_corrector());

        let reduced = OpticSpec {
            corrector: "f/6.3 reducer".to_string(),
            ..bare
        };
        assert!(reduced.has_corrector());
    }
}
