//! Read/write field JSON files.
//!
//! Field JSON is the portable representation of one reconstruction run:
//! inputs (state point, parameter source), the grid axes and the `-gU'_2`
//! values. `pd plot` re-renders a saved file without re-evaluating anything.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

use crate::domain::StatePoint;
use crate::error::Error;
use crate::reconstruct::AngleGrid;

/// A saved reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub state: StatePoint,
    /// Parameter file the field was computed from.
    pub parameters: String,
    pub r: Vec<f64>,
    pub phi1: Array2<f64>,
    pub phi2: Array2<f64>,
    /// `-gU'_2`, shape `(r.len(), rows, cols)`.
    pub mgu2: Array3<f64>,
}

impl FieldFile {
    pub fn new(
        state: StatePoint,
        parameters: &Path,
        r: &[f64],
        angles: &AngleGrid,
        mgu2: Array3<f64>,
    ) -> Self {
        Self {
            tool: "pd".to_string(),
            generated_at: Utc::now(),
            state,
            parameters: parameters.display().to_string(),
            r: r.to_vec(),
            phi1: angles.phi1().clone(),
            phi2: angles.phi2().clone(),
            mgu2,
        }
    }

    pub fn angles(&self) -> Result<AngleGrid, Error> {
        AngleGrid::new(self.phi1.clone(), self.phi2.clone())
    }
}

/// Write a field JSON file.
pub fn write_field_json(path: &Path, field: &FieldFile) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::to_writer_pretty(BufWriter::new(file), field).map_err(|e| Error::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read a field JSON file.
pub fn read_field_json(path: &Path) -> Result<FieldFile, Error> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let field: FieldFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        line: e.line(),
        message: format!("Invalid field JSON: {e}"),
    })?;

    check_dims(&field).map_err(|message| Error::Field {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(field)
}

/// `mgu2` must hold exactly one value per distance and grid point.
fn check_dims(field: &FieldFile) -> Result<(), String> {
    let angles = field.angles().map_err(|e| e.to_string())?;
    let (rows, cols) = angles.shape();
    if rows == 0 || cols == 0 {
        return Err(format!("empty angle grid ({rows}x{cols})"));
    }

    let expected = (field.r.len(), rows, cols);
    if field.mgu2.dim() != expected {
        return Err(format!(
            "mgu2 has shape {:?}, r and the angle grid need {expected:?}",
            field.mgu2.dim()
        ));
    }
    Ok(())
}
