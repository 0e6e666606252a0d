//! Parameter-file ingest.
//!
//! Turns a fit-parameter CSV into two `ParameterTable`s (`f^11`, `f^22`).
//!
//! Row layout: `label, slot, q1, q2, ...`
//!
//! - `label` is a 7-character token `f^FF_kl` (`FF` = `11` or `22`, `k`/`l` digits),
//!   taken verbatim: surrounding whitespace makes it malformed
//! - `slot` names the first-level parameter (`a`, `mu`, ...); it is not interpreted
//! - the remaining cells, trimmed, are the second-level coefficients; empty
//!   ones are ignored
//!
//! Rows sharing a label accumulate as successive slots in file order.
//!
//! Behaviour:
//! - rows with an empty label (header, comments, spacing) are skipped silently
//! - rows with a malformed label are skipped and reported as `RowWarning`s
//! - an unparseable number inside a well-labelled row aborts the load, since
//!   dropping it would shift every following slot of that coefficient
//! - a record the CSV reader cannot decode (e.g. invalid UTF-8) aborts the
//!   load for the same reason

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{CoefficientIndex, Family, ParameterTables};
use crate::error::Error;

/// Length of a coefficient label, e.g. `f^11_02`.
pub const LABEL_LEN: usize = 7;

/// A skipped row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowWarning {
    pub line: usize,
    pub label: String,
    pub message: String,
}

/// Ingest output: both tables plus what was skipped.
#[derive(Debug, Clone)]
pub struct LoadedParameters {
    pub tables: ParameterTables,
    pub warnings: Vec<RowWarning>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load a parameter file from disk.
pub fn load_parameter_file(path: &Path) -> Result<LoadedParameters, Error> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_parameter_file(file, path)
}

/// Parse parameter CSV from any reader. `source` is only used in messages.
pub fn parse_parameter_file<R: Read>(reader: R, source: &Path) -> Result<LoadedParameters, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut tables = ParameterTables::default();
    let mut warnings = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_used = 0usize;

    for (idx, result) in reader.records().enumerate() {
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line() as usize).unwrap_or(idx + 1);
                let message = format!("CSV parse error: {e}");
                // A record that cannot be decoded may belong to a labelled
                // coefficient; dropping it would shift that coefficient's slots.
                return Err(match e.into_kind() {
                    csv::ErrorKind::Io(err) => Error::Io {
                        path: source.to_path_buf(),
                        source: err,
                    },
                    _ => Error::Parse {
                        path: source.to_path_buf(),
                        line,
                        message,
                    },
                });
            }
        };
        let line = record.position().map(|p| p.line() as usize).unwrap_or(idx + 1);

        let label = normalize_label(record.get(0).unwrap_or(""));
        if label.is_empty() {
            continue;
        }

        let (family, index) = match parse_label(label) {
            Ok(key) => key,
            Err(message) => {
                warnings.push(RowWarning {
                    line,
                    label: label.to_string(),
                    message,
                });
                continue;
            }
        };

        let row = parse_coefficients(&record).map_err(|message| Error::Parse {
            path: source.to_path_buf(),
            line,
            message: format!("{label}: {message}"),
        })?;

        tables.family_mut(family).push_row(index, row);
        rows_used += 1;
    }

    Ok(LoadedParameters {
        tables,
        warnings,
        rows_read,
        rows_used,
    })
}

fn normalize_label(cell: &str) -> &str {
    // Spreadsheet exports may prefix the first cell with a UTF-8 BOM.
    cell.trim_start_matches('\u{feff}')
}

/// Decode `f^FF_kl` into its family and index.
pub fn parse_label(label: &str) -> Result<(Family, CoefficientIndex), String> {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() != LABEL_LEN {
        return Err(format!("Invalid Fourier coefficient label: {label}"));
    }

    let code: String = chars[1..4].iter().collect();
    let family = Family::from_label_code(&code)
        .ok_or_else(|| format!("Unknown coefficient family '{code}' in label {label}"))?;

    let index = match (chars[5].to_digit(10), chars[6].to_digit(10)) {
        (Some(k), Some(l)) => CoefficientIndex::new(k as u8, l as u8),
        _ => None,
    }
    .ok_or_else(|| format!("Invalid Fourier index in label {label}"))?;

    Ok((family, index))
}

fn parse_coefficients(record: &StringRecord) -> Result<Vec<f64>, String> {
    record
        .iter()
        .skip(2)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            cell.parse::<f64>()
                .map_err(|e| format!("invalid number '{cell}': {e}"))
        })
        .collect()
}
