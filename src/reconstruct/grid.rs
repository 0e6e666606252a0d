//! Angle grids and the broadcasting contract of the reconstruction.
//!
//! Shapes:
//!
//! - distances are a 1-D slice `r` of length `n_r` (a single distance is `&[r]`)
//! - `phi1` and `phi2` are 2-D arrays broadcast to one common shape `(rows, cols)`;
//!   along each axis the lengths must be equal or one of them must be 1
//! - a scalar angle pair is the `1 × 1` grid
//! - the reconstructed field has shape `(n_r, rows, cols)`

use ndarray::{Array2, Zip};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct AngleGrid {
    phi1: Array2<f64>,
    phi2: Array2<f64>,
}

impl AngleGrid {
    /// A single `(phi1, phi2)` pair.
    pub fn point(phi1: f64, phi2: f64) -> Self {
        Self {
            phi1: Array2::from_elem((1, 1), phi1),
            phi2: Array2::from_elem((1, 1), phi2),
        }
    }

    /// Broadcast two angle arrays to their common shape.
    pub fn new(phi1: Array2<f64>, phi2: Array2<f64>) -> Result<Self, Error> {
        let (a, b) = (phi1.dim(), phi2.dim());
        let shape = match (broadcast_len(a.0, b.0), broadcast_len(a.1, b.1)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => return Err(Error::Shape { phi1: a, phi2: b }),
        };
        if a == shape && b == shape {
            return Ok(Self { phi1, phi2 });
        }

        let expand = |arr: &Array2<f64>| {
            arr.broadcast(shape)
                .map(|view| view.to_owned())
                .ok_or(Error::Shape { phi1: a, phi2: b })
        };
        Ok(Self {
            phi1: expand(&phi1)?,
            phi2: expand(&phi2)?,
        })
    }

    /// Coordinate matrices from two axes (`meshgrid` convention).
    ///
    /// The result has shape `(phi2.len(), phi1.len())`; `phi1` varies along
    /// columns and `phi2` along rows.
    pub fn meshgrid(phi1: &[f64], phi2: &[f64]) -> Self {
        let shape = (phi2.len(), phi1.len());
        Self {
            phi1: Array2::from_shape_fn(shape, |(_, j)| phi1[j]),
            phi2: Array2::from_shape_fn(shape, |(i, _)| phi2[i]),
        }
    }

    /// Common `(rows, cols)` shape.
    pub fn shape(&self) -> (usize, usize) {
        self.phi1.dim()
    }

    pub fn phi1(&self) -> &Array2<f64> {
        &self.phi1
    }

    pub fn phi2(&self) -> &Array2<f64> {
        &self.phi2
    }

    /// Evaluate `f(phi1, phi2)` at every grid point.
    pub fn map<F>(&self, f: F) -> Array2<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        Zip::from(&self.phi1)
            .and(&self.phi2)
            .map_collect(|&p1, &p2| f(p1, p2))
    }
}

fn broadcast_len(a: usize, b: usize) -> Option<usize> {
    match (a, b) {
        _ if a == b => Some(a),
        (1, n) | (n, 1) => Some(n),
        _ => None,
    }
}
