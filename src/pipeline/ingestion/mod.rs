//! File ingestion: batch validation, format dispatch, and normalization of
//! raw CSV/JSON files into canonical employee records.

pub mod csv;
pub mod headers;
pub mod json;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::Employee;
use crate::error::{PayrollError, Result};

pub use headers::{standardize, HeaderResolution};

/// Check that every input path exists before any file is parsed.
///
/// Runs once over the whole batch so the error can name all missing files
/// at once instead of failing on the first.
pub fn validate_files(paths: &[PathBuf]) -> Result<()> {
    let missing: Vec<String> = paths
        .iter()
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PayrollError::MissingFiles(missing))
    }
}

/// Normalize a single file, dispatching on its extension (case-insensitive).
pub fn normalize_file(path: &Path) -> Result<Vec<Employee>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());
    match extension.as_deref() {
        Some("csv") => csv::read_csv(path),
        Some("json") => json::read_json(path),
        _ => Err(PayrollError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Normalize every input file in argument order and concatenate the results.
pub fn normalize_files(paths: &[PathBuf]) -> Result<Vec<Employee>> {
    validate_files(paths)?;

    let mut records = Vec::new();
    for path in paths {
        records.extend(normalize_file(path)?);
    }

    info!(
        files = paths.len(),
        records = records.len(),
        "normalized input files"
    );
    Ok(records)
}
