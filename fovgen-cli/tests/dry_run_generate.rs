use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn dry_run_reports_files_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let cameras = dir.path().join("cameras.csv");
    let optics = dir.path().join("optics.csv");
    std::fs::write(&cameras, "name,photosite_um,width,height\nCam,5.4,2048,2048\n").unwrap();
    std::fs::write(&optics, "name,corrector,focal_mm\nScope,,1000\n").unwrap();

    Command::cargo_bin("fovgen")
        .unwrap()
        .arg("generate")
        .arg("--cameras")
        .arg(&cameras)
        .arg("--optics")
        .arg(&optics)
        .arg("--out-dir")
        .arg(out.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would write"))
        .stdout(predicate::str::contains("Cam-Scope.vot"))
        .stdout(predicate::str::contains("[dry-run]"));

    assert_eq!(
        std::fs::read_dir(out.path()).unwrap().count(),
        0,
        "dry-run must not create files"
    );
}
