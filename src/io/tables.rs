//! Coefficient/basis table ingest.
//!
//! Each expansion is persisted as two header-less CSV files that are aligned
//! row by row:
//!
//! - `PCE_{quantity}_{load_name}{IM}_BASIS.csv`: 4 integer degree columns
//!   (`T1`, `mratio`, `muf`, `Tb`)
//! - `PCE_{quantity}_{load_name}{IM}_COEFS.csv`: 1 coefficient column
//!
//! Rows are zipped into `PceTerm`s at load time so nothing downstream depends
//! on positional alignment. Any malformed cell, row-count mismatch or degree
//! outside `0..=7` fails the whole table.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::debug;

use crate::domain::{MAX_DEGREE, N_VARIABLES, PceTable, PceTerm, TableKey};
use crate::error::AppError;

/// File names of the basis and coefficient CSVs for `key`.
pub fn table_file_names(key: TableKey) -> (String, String) {
    let stem = format!(
        "PCE_{}_{}{}",
        key.quantity.key(),
        key.rqi.load_name(),
        key.im.tag()
    );
    (format!("{stem}_BASIS.csv"), format!("{stem}_COEFS.csv"))
}

/// Full paths of the basis and coefficient CSVs for `key` under `base_dir`.
pub fn table_paths(base_dir: &Path, key: TableKey) -> (PathBuf, PathBuf) {
    let (basis, coefs) = table_file_names(key);
    (base_dir.join(basis), base_dir.join(coefs))
}

/// Load and zip the two CSV files for `key`.
pub fn load_table(base_dir: &Path, key: TableKey) -> Result<PceTable, AppError> {
    let (basis_path, coefs_path) = table_paths(base_dir, key);

    let degrees = parse_basis(open(&basis_path)?, &basis_path.display().to_string())?;
    let coefficients = parse_coefficients(open(&coefs_path)?, &coefs_path.display().to_string())?;

    let table = zip_rows(&degrees, &coefficients, &key.to_string())?;
    debug!(%key, terms = table.len(), dir = %base_dir.display(), "loaded expansion table");
    Ok(table)
}

fn open(path: &Path) -> Result<File, AppError> {
    File::open(path)
        .map_err(|e| AppError::unavailable(format!("Failed to open table '{}': {e}", path.display())))
}

fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

/// Parse a basis-index CSV into degree tuples.
pub fn parse_basis<R: Read>(rdr: R, label: &str) -> Result<Vec<[u8; N_VARIABLES]>, AppError> {
    let mut out = Vec::new();
    for (idx, result) in reader(rdr).records().enumerate() {
        let line = idx + 1;
        let record = read_record(result, label, line)?;
        out.push(parse_degree_row(&record, label, line)?);
    }
    Ok(out)
}

/// Parse a coefficient CSV into a single column of values.
pub fn parse_coefficients<R: Read>(rdr: R, label: &str) -> Result<Vec<f64>, AppError> {
    let mut out = Vec::new();
    for (idx, result) in reader(rdr).records().enumerate() {
        let line = idx + 1;
        let record = read_record(result, label, line)?;
        if record.len() != 1 {
            return Err(AppError::data_integrity(format!(
                "{label}:{line}: expected 1 coefficient column, found {}.",
                record.len()
            )));
        }
        let cell = &record[0];
        let value: f64 = cell.parse().map_err(|_| {
            AppError::data_integrity(format!("{label}:{line}: invalid coefficient `{cell}`."))
        })?;
        if !value.is_finite() {
            return Err(AppError::data_integrity(format!(
                "{label}:{line}: non-finite coefficient `{cell}`."
            )));
        }
        out.push(value);
    }
    Ok(out)
}

/// Combine aligned basis/coefficient rows into a table.
pub fn zip_rows(degrees: &[[u8; N_VARIABLES]], coefficients: &[f64], label: &str) -> Result<PceTable, AppError> {
    if degrees.len() != coefficients.len() {
        return Err(AppError::data_integrity(format!(
            "Table {label}: basis has {} rows but coefficients have {}.",
            degrees.len(),
            coefficients.len()
        )));
    }

    let terms = degrees
        .iter()
        .zip(coefficients)
        .map(|(&degrees, &coefficient)| PceTerm { coefficient, degrees })
        .collect();
    Ok(PceTable::new(terms))
}

fn read_record(result: Result<StringRecord, csv::Error>, label: &str, line: usize) -> Result<StringRecord, AppError> {
    result.map_err(|e| AppError::data_integrity(format!("{label}:{line}: CSV parse error: {e}")))
}

fn parse_degree_row(record: &StringRecord, label: &str, line: usize) -> Result<[u8; N_VARIABLES], AppError> {
    if record.len() != N_VARIABLES {
        return Err(AppError::data_integrity(format!(
            "{label}:{line}: expected {N_VARIABLES} degree columns, found {}.",
            record.len()
        )));
    }

    let mut out = [0u8; N_VARIABLES];
    for (col, cell) in record.iter().enumerate() {
        out[col] = parse_degree(cell).ok_or_else(|| {
            AppError::data_integrity(format!(
                "{label}:{line}: degree `{cell}` in column {} is not an integer in 0..={MAX_DEGREE}.",
                col + 1
            ))
        })?;
    }
    Ok(out)
}

/// Accepts `3` as well as `3.0` (tables exported from numeric tools).
fn parse_degree(cell: &str) -> Option<u8> {
    let value = match cell.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let f: f64 = cell.parse().ok()?;
            if !f.is_finite() || f.fract() != 0.0 {
                return None;
            }
            f as i64
        }
    };
    if (0..=MAX_DEGREE as i64).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}
