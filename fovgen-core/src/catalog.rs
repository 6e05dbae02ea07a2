//! Camera and optics catalog readers.
//!
//! Both catalogs are header-first delimited text. Fields are consumed
//! positionally: cameras use columns 0–3 (name, photosite µm, width, height),
//! optics use columns 0–2 (name, corrector, focal mm). Extra columns are
//! ignored.
//!
//! The default catalogs ship inside the binary via `include_str!`; the
//! `load_*` functions read a caller-supplied file instead.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::CatalogError;
use crate::types::{CameraSpec, OpticSpec};

// ---------------------------------------------------------------------------
// Embedded catalogs — baked into the binary at compile time
// ---------------------------------------------------------------------------

const CAMERAS_CSV: &str = include_str!("catalogs/cameras.csv");
const OPTICS_CSV: &str = include_str!("catalogs/optics.csv");

/// Parse the camera catalog shipped with the binary.
pub fn builtin_cameras() -> Result<Vec<CameraSpec>, CatalogError> {
    read_cameras(CAMERAS_CSV.as_bytes())
}

/// Parse the optics catalog shipped with the binary.
pub fn builtin_optics() -> Result<Vec<OpticSpec>, CatalogError> {
    read_optics(OPTICS_CSV.as_bytes())
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

fn open_catalog(path: &Path) -> Result<File, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a camera catalog from `path`.
pub fn load_cameras(path: &Path) -> Result<Vec<CameraSpec>, CatalogError> {
    read_cameras(open_catalog(path)?)
}

/// Load an optics catalog from `path`.
pub fn load_optics(path: &Path) -> Result<Vec<OpticSpec>, CatalogError> {
    read_optics(open_catalog(path)?)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse camera rows from any reader. The first row is the header.
pub fn read_cameras<R: std::io::Read>(reader: R) -> Result<Vec<CameraSpec>, CatalogError> {
    let mut rdr = csv_reader(reader);
    let mut cameras = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        // Header is line 1; first data record is line 2.
        let line = idx + 2;
        let record = result?;
        ensure_columns(&record, line, 4)?;

        cameras.push(CameraSpec {
            name: field(&record, 0).to_string(),
            photosite_size_um: parse_num(&record, line, 1, "photosite size")?,
            width_photosites: parse_num(&record, line, 2, "sensor width")?,
            height_photosites: parse_num(&record, line, 3, "sensor height")?,
        });
    }
    Ok(cameras)
}

/// Parse optic rows from any reader. The first row is the header.
///
/// The corrector column may be blank; a blank value means the optic is used
/// without a corrector/reducer.
pub fn read_optics<R: std::io::Read>(reader: R) -> Result<Vec<OpticSpec>, CatalogError> {
    let mut rdr = csv_reader(reader);
    let mut optics = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let line = idx + 2;
        let record = result?;
        ensure_columns(&record, line, 3)?;

        optics.push(OpticSpec {
            name: field(&record, 0).to_string(),
            corrector: field(&record, 1).to_string(),
            focal_length_mm: parse_num(&record, line, 2, "focal length")?,
        });
    }
    Ok(optics)
}

fn csv_reader<R: std::io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn ensure_columns(record: &StringRecord, line: usize, expected: usize) -> Result<(), CatalogError> {
    if record.len() < expected {
        return Err(CatalogError::Row {
            line,
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or_default()
}

fn parse_num<T: FromStr>(
    record: &StringRecord,
    line: usize,
    idx: usize,
    column: &'static str,
) -> Result<T, CatalogError> {
    let raw = field(record, idx);
    raw.parse::<T>().map_err(|_| CatalogError::Numeric {
        line,
        column,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
