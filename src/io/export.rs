//! CSV writers.
//!
//! - `write_parameter_file`: a `ParameterTables` in the format `ingest` reads
//! - `write_field_csv`: one row per `(r, phi1, phi2)` point, easy to consume in
//!   spreadsheets or downstream scripts

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array3;

use crate::domain::{Family, ParameterTables};
use crate::error::Error;
use crate::math::u2_prime;
use crate::models::fourier_shape;
use crate::reconstruct::AngleGrid;

/// Widest second-level row (`h3`).
const MAX_ROW_LEN: usize = 20;

/// Write both tables as a parameter CSV.
///
/// Coefficients are written in shortest round-trip form, so reading the file
/// back yields bit-identical values.
pub fn write_parameter_file(path: &Path, tables: &ParameterTables) -> Result<(), Error> {
    let fail = |e: std::io::Error| Error::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut out = BufWriter::new(File::create(path).map_err(fail)?);

    let header: Vec<String> = (1..=MAX_ROW_LEN).map(|i| format!("q{i}")).collect();
    writeln!(out, ",,{}", header.join(",")).map_err(fail)?;

    for family in [Family::F11, Family::F22] {
        let table = tables.family(family);
        for index in table.indices() {
            let label = family.label(index);
            let slots = fourier_shape(index).slot_names();
            for (slot, row) in table.rows(index).unwrap_or(&[]).iter().enumerate() {
                let name = slots
                    .get(slot)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("p{}", slot + 1));
                let values: Vec<String> = row.iter().map(|v| format!("{v:e}")).collect();
                writeln!(out, "{label},{name},{}", values.join(",")).map_err(fail)?;
            }
        }
    }

    out.flush().map_err(fail)
}

/// Write a reconstructed field (and `g = -(-gU'_2)/U'_2`) to CSV.
pub fn write_field_csv(
    path: &Path,
    r: &[f64],
    angles: &AngleGrid,
    field: &Array3<f64>,
) -> Result<(), Error> {
    let fail = |e: std::io::Error| Error::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut out = BufWriter::new(File::create(path).map_err(fail)?);

    writeln!(out, "r,phi1,phi2,mgu2,g").map_err(fail)?;

    let (rows, cols) = angles.shape();
    for (ir, &dist) in r.iter().enumerate() {
        let u2 = u2_prime(dist);
        for i in 0..rows {
            for j in 0..cols {
                let value = field[[ir, i, j]];
                writeln!(
                    out,
                    "{:.10},{:.10},{:.10},{:.10e},{:.10e}",
                    dist,
                    angles.phi1()[[i, j]],
                    angles.phi2()[[i, j]],
                    value,
                    -value / u2,
                )
                .map_err(fail)?;
            }
        }
    }

    out.flush().map_err(fail)
}
