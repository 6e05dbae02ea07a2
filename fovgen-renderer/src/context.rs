//! Footprint context — the rendering payload for one camera-optic pairing.

use fovgen_core::{CameraSpec, FovResult, OpticSpec};

/// Values substituted into the footprint template.
///
/// The five tokens must all be supplied for every render; a token left out of
/// the substitution list stays in the output as its literal placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintContext {
    /// Footprint identifier: the output filename stem.
    pub id: String,
    pub telescope_name: String,
    pub instrument_name: String,
    pub half_field_width_arcsec: i64,
    pub half_field_height_arcsec: i64,
}

impl FootprintContext {
    /// Build the context for one pairing. `id` is the filename stem.
    pub fn new(id: String, camera: &CameraSpec, optic: &OpticSpec, fov: &FovResult) -> Self {
        FootprintContext {
            id,
            telescope_name: optic.name.clone(),
            instrument_name: camera.name.clone(),
            half_field_width_arcsec: fov.half_width_arcsec,
            half_field_height_arcsec: fov.half_height_arcsec,
        }
    }

    /// Ordered `(token, value)` pairs for substitution.
    ///
    /// The order is fixed: ID, TelescopeName, InstrumentName,
    /// HalfFieldWidthArcsec, HalfFieldHeightArcsec.
    pub fn substitutions(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.clone()),
            ("TelescopeName", self.telescope_name.clone()),
            ("InstrumentName", self.instrument_name.clone()),
            (
                "HalfFieldWidthArcsec",
                self.half_field_width_arcsec.to_string(),
            ),
            (
                "HalfFieldHeightArcsec",
                self.half_field_height_arcsec.to_string(),
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
