//! Batch input CSV ingest.
//!
//! A batch file is a headed CSV with one evaluation point per row:
//!
//! `t1,muf,mratio,tb,rqi,im`
//!
//! Header names are case-insensitive and may appear in any order; extra
//! columns are ignored. Rows whose numeric cells do not parse are reported as
//! row errors rather than aborting the batch. Range checks are left to the
//! evaluation step.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::RawInput;
use crate::error::AppError;

const REQUIRED: [&str; 6] = ["t1", "muf", "mratio", "tb", "rqi", "im"];

/// One parsed batch row (1-based file line, header is line 1).
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub line: usize,
    pub input: RawInput,
}

/// Row-level parse problem.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub rows: Vec<BatchRow>,
    pub row_errors: Vec<RowError>,
}

impl BatchInput {
    pub fn rows_read(&self) -> usize {
        self.rows.len() + self.row_errors.len()
    }
}

/// Open and parse a batch CSV file.
pub fn load_batch(path: &Path) -> Result<BatchInput, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open batch CSV '{}': {e}", path.display())))?;
    read_batch(file)
}

/// Parse a batch CSV from any reader.
pub fn read_batch<R: Read>(rdr: R) -> Result<BatchInput, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read batch CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for name in REQUIRED {
        if !header_map.contains_key(name) {
            return Err(AppError::usage(format!("Missing required batch column: `{name}`")));
        }
    }

    let mut out = BatchInput::default();
    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header, lines are 1-based.
        let line = idx + 2;
        let parsed = result
            .map_err(|e| format!("CSV parse error: {e}"))
            .and_then(|record| parse_row(&record, &header_map));
        match parsed {
            Ok(input) => out.rows.push(BatchRow { line, input }),
            Err(message) => out.row_errors.push(RowError { line, message }),
        }
    }

    Ok(out)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports may prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<RawInput, String> {
    Ok(RawInput {
        t1: parse_f64(record, header_map, "t1")?,
        muf: parse_f64(record, header_map, "muf")?,
        mratio: parse_f64(record, header_map, "mratio")?,
        tb: parse_f64(record, header_map, "tb")?,
        rqi: get_required(record, header_map, "rqi")?.to_string(),
        im: get_required(record, header_map, "im")?.to_string(),
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    header_map
        .get(name)
        .and_then(|&idx| record.get(idx))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing `{name}` value."))
}

fn parse_f64(record: &StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Result<f64, String> {
    let raw = get_required(record, header_map, name)?;
    raw.parse::<f64>()
        .map_err(|_| format!("Invalid `{name}` value `{raw}`."))
}
