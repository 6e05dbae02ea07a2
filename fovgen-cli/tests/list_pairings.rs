use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_catalogs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let cameras = dir.path().join("cameras.csv");
    let optics = dir.path().join("optics.csv");
    std::fs::write(&cameras, "name,photosite_um,width,height\nCam,5.4,2048,2048\n").unwrap();
    std::fs::write(
        &optics,
        "name,corrector,focal_mm\nScope,,1000\nScope,0.85x reducer,850\n",
    )
    .unwrap();
    (cameras, optics)
}

#[test]
fn list_tabulates_every_pairing() {
    let dir = TempDir::new().unwrap();
    let (cameras, optics) = write_catalogs(&dir);

    Command::cargo_bin("fovgen")
        .unwrap()
        .arg("list")
        .arg("--cameras")
        .arg(&cameras)
        .arg("--optics")
        .arg(&optics)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cam"))
        .stdout(predicate::str::contains("Scope"))
        .stdout(predicate::str::contains("1139"))
        .stdout(predicate::str::contains("Cam-Scope.vot"));
}

#[test]
fn list_json_is_parseable_and_complete() {
    let dir = TempDir::new().unwrap();
    let (cameras, optics) = write_catalogs(&dir);

    let output = Command::cargo_bin("fovgen")
        .unwrap()
        .arg("list")
        .arg("--cameras")
        .arg(&cameras)
        .arg("--optics")
        .arg(&optics)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().expect("JSON array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["camera"], "Cam");
    assert_eq!(rows[0]["half_width_arcsec"], 1139);
    assert_eq!(rows[1]["corrector"], "0.85x reducer");
    assert_eq!(rows[1]["file"], "Cam-Scope-0.85x-reducer.vot");
}

#[test]
fn list_writes_no_files() {
    let dir = TempDir::new().unwrap();
    let (cameras, optics) = write_catalogs(&dir);
    let before = std::fs::read_dir(dir.path()).unwrap().count();

    Command::cargo_bin("fovgen")
        .unwrap()
        .arg("list")
        .arg("--cameras")
        .arg(&cameras)
        .arg("--optics")
        .arg(&optics)
        .assert()
        .success();

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), before);
}
