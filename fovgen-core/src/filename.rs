//! Output filename composition.
//!
//! Filenames are derived deterministically from the pair's names so that a
//! given camera-optic combination always maps to the same `.vot` file.
//! Sanitization only handles slash, backslash and space; other
//! filesystem-unsafe characters (colon, quote...) pass through unchanged.

/// Strip `/` and `\`, replace spaces with hyphens.
pub fn sanitize(s: &str) -> String {
    s.replace('/', "").replace('\\', "").replace(' ', "-")
}

/// Filename stem for a camera-optic pairing: `camera-optic` or
/// `camera-optic-corrector` when a corrector is present after sanitization.
pub fn compose(camera_name: &str, optic_name: &str, corrector_name: &str) -> String {
    let camera = sanitize(camera_name);
    let optic = sanitize(optic_name);
    let corrector = sanitize(corrector_name);

    let mut stem = format!("{camera}-{optic}");
    if !corrector.is_empty() {
        stem.push('-');
        stem.push_str(&corrector);
    }
    stem
}

/// Full output filename, with the `.vot` extension.
pub fn vot_filename(camera_name: &str, optic_name: &str, corrector_name: &str) -> String {
    format!("{}.vot", compose(camera_name, optic_name, corrector_name))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("My Cam/1", "My-Cam1")]
    #[case("Scope\\A", "ScopeA")]
    #[case("f/6.3 reducer", "f6.3-reducer")]
    #[case("plain", "plain")]
    fn sanitize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    #[test]
    fn empty_corrector_is_omitted() {
        assert_eq!(compose("My Cam/1", "Scope\\A", ""), "My-Cam1-ScopeA");
    }

    #[test]
    fn corrector_is_appended_when_present() {
        assert_eq!(compose("CamX", "OptY", "CorZ"), "CamX-OptY-CorZ");
    }

    #[test]
    fn corrector_that_sanitizes_to_empty_is_omitted() {
        // A corrector of only stripped characters must not leave a trailing hyphen.
        assert_eq!(compose("CamX", "OptY", "/\\"), "CamX-OptY");
    }

    #[test]
    fn vot_extension() {
        assert_eq!(vot_filename("CamX", "OptY", ""), "CamX-OptY.vot");
    }
}
