//! Field-of-view calculator.
//!
//! A photosite of `p` µm behind a focal length of `f` mm subtends
//! `p * 206 / f` arcseconds; multiplying by the photosite count gives the
//! sensor's angular extent along that axis. The Aladin footprint format wants
//! half-extents, so each full field is halved and rounded to the nearest
//! integer with ties going to even.

use crate::error::FovError;
use crate::types::{CameraSpec, FovResult, OpticSpec};

/// Arcseconds per radian (206265) scaled for µm photosites against mm focal
/// lengths. Fixed empirical conversion constant, not configurable.
const ARCSEC_FACTOR: f64 = 206.0;

/// Compute the half-field extents for a camera behind an optic.
///
/// Fails with [`FovError`] when any operand is zero or negative; the focal
/// length is the divisor and is never allowed to reach the division.
pub fn half_fields(camera: &CameraSpec, optic: &OpticSpec) -> Result<FovResult, FovError> {
    let width = field_arcsec(
        camera.photosite_size_um,
        camera.width_photosites,
        optic.focal_length_mm,
    )?;
    let height = field_arcsec(
        camera.photosite_size_um,
        camera.height_photosites,
        optic.focal_length_mm,
    )?;

    Ok(FovResult {
        half_width_arcsec: half(width),
        half_height_arcsec: half(height),
    })
}

/// Full angular extent along one axis, rounded to whole arcseconds.
fn field_arcsec(
    photosite_size_um: f64,
    photosite_count: i32,
    focal_length_mm: i32,
) -> Result<i64, FovError> {
    if photosite_size_um <= 0.0 {
        return Err(FovError::NonPositivePhotositeSize(photosite_size_um));
    }
    if photosite_count <= 0 {
        return Err(FovError::NonPositivePhotositeCount(photosite_count));
    }
    if focal_length_mm <= 0 {
        return Err(FovError::NonPositiveFocalLength(focal_length_mm));
    }

    let field =
        photosite_size_um * f64::from(photosite_count) * ARCSEC_FACTOR / f64::from(focal_length_mm);
    Ok(field.round() as i64)
}

/// Halve a full field, rounding ties to even.
fn half(field_arcsec: i64) -> i64 {
    (field_arcsec as f64 / 2.0).round_ties_even() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn camera(size_um: f64, width: i32, height: i32) -> CameraSpec {
        CameraSpec {
            name: "cam".to_string(),
            photosite_size_um: size_um,
            width_photosites: width,
            height_photosites: height,
        }
    }

    fn optic(focal_mm: i32) -> OpticSpec {
        OpticSpec {
            name: "optic".to_string(),
            corrector: String::new(),
            focal_length_mm: focal_mm,
        }
    }

    #[test]
    fn typical_values() {
        // 5.4 µm × 2048 photosites at 1000 mm: full field 2278", half 1139".
        let fov = half_fields(&camera(5.4, 2048, 2048), &optic(1000)).unwrap();
        assert_eq!(fov.half_width_arcsec, 1139);
        assert_eq!(fov.half_height_arcsec, 1139);
    }

    #[test]
    fn deterministic() {
        let cam = camera(3.8, 4656, 3520);
        let opt = optic(510);
        assert_eq!(
            half_fields(&cam, &opt).unwrap(),
            half_fields(&cam, &opt).unwrap()
        );
    }

    #[test]
    fn doubling_photosite_count_roughly_doubles_the_field() {
        let single = field_arcsec(5.4, 1024, 1000).unwrap();
        let double = field_arcsec(5.4, 2048, 1000).unwrap();
        // Equal up to the two independent roundings.
        assert!((double - 2 * single).abs() <= 1);
    }

    #[rstest]
    #[case(2277, 1138)] // 1138.5 → even
    #[case(2278, 1139)]
    #[case(2279, 1140)] // 1139.5 → even
    #[case(2281, 1140)] // 1140.5 → even
    fn halving_rounds_ties_to_even(#[case] field: i64, #[case] expected: i64) {
        assert_eq!(half(field), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-600)]
    fn non_positive_focal_length_is_rejected(#[case] focal_mm: i32) {
        let err = half_fields(&camera(5.4, 2048, 2048), &optic(focal_mm)).unwrap_err();
        assert!(matches!(err, FovError::NonPositiveFocalLength(_)));
    }

    #[test]
    fn non_positive_photosite_size_is_rejected() {
        let err = half_fields(&camera(0.0, 2048, 2048), &optic(1000)).unwrap_err();
        assert!(matches!(err, FovError::NonPositivePhotositeSize(_)));
    }

    #[test]
    fn non_positive_photosite_count_is_rejected() {
        let err = half_fields(&camera(5.4, 2048, 0), &optic(1000)).unwrap_err();
        assert!(matches!(err, FovError::NonPositivePhotositeCount(_)));
    }
}
