//! Shared domain types.
//!
//! The angular expansion of `-gU'_2` is a 3×3 bivariate Fourier series. Every
//! term is addressed by an index pair `(k, l)` and a family:
//!
//! - `f^11_kl` multiplies `cos(k·phi1)·cos(l·phi2)` and exists for every `(k, l)`
//! - `f^22_kl` multiplies `sin(k·phi1)·sin(l·phi2)` and exists only for `k, l > 0`

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{fourier_shape, parameter_shapes};

/// Highest Fourier order in either angle.
pub const MAX_ORDER: u8 = 2;

/// Index pair `(k, l)` of one term of the angular expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoefficientIndex {
    k: u8,
    l: u8,
}

impl CoefficientIndex {
    /// Every index pair in summation order (`k` outer, `l` inner).
    pub const ALL: [CoefficientIndex; 9] = [
        CoefficientIndex { k: 0, l: 0 },
        CoefficientIndex { k: 0, l: 1 },
        CoefficientIndex { k: 0, l: 2 },
        CoefficientIndex { k: 1, l: 0 },
        CoefficientIndex { k: 1, l: 1 },
        CoefficientIndex { k: 1, l: 2 },
        CoefficientIndex { k: 2, l: 0 },
        CoefficientIndex { k: 2, l: 1 },
        CoefficientIndex { k: 2, l: 2 },
    ];

    /// Returns `None` unless both orders lie in `0..=MAX_ORDER`.
    pub fn new(k: u8, l: u8) -> Option<Self> {
        (k <= MAX_ORDER && l <= MAX_ORDER).then_some(Self { k, l })
    }

    pub const fn k(self) -> u8 {
        self.k
    }

    pub const fn l(self) -> u8 {
        self.l
    }

    /// Whether an `f^22` (sine·sine) term exists for this index.
    pub fn has_sine_term(self) -> bool {
        self.k > 0 && self.l > 0
    }

    /// Families that contribute to the series at this index, cosine first.
    pub fn families(self) -> &'static [Family] {
        if self.has_sine_term() {
            &[Family::F11, Family::F22]
        } else {
            &[Family::F11]
        }
    }
}

impl fmt::Display for CoefficientIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.k, self.l)
    }
}

/// Coefficient family: cosine·cosine (`11`) or sine·sine (`22`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    #[serde(rename = "11")]
    F11,
    #[serde(rename = "22")]
    F22,
}

impl Family {
    /// Superscript code as it appears in a table label (`^11` / `^22`).
    pub fn label_code(self) -> &'static str {
        match self {
            Family::F11 => "^11",
            Family::F22 => "^22",
        }
    }

    pub fn from_label_code(code: &str) -> Option<Self> {
        match code {
            "^11" => Some(Family::F11),
            "^22" => Some(Family::F22),
            _ => None,
        }
    }

    /// Full table label for one coefficient, e.g. `f^11_12`.
    pub fn label(self, index: CoefficientIndex) -> String {
        format!("f{}_{}", self.label_code(), index)
    }

    /// Angular factor multiplying this family's coefficient.
    pub fn angular(self, index: CoefficientIndex, phi1: f64, phi2: f64) -> f64 {
        let k = f64::from(index.k());
        let l = f64::from(index.l());
        match self {
            Family::F11 => (k * phi1).cos() * (l * phi2).cos(),
            Family::F22 => (k * phi1).sin() * (l * phi2).sin(),
        }
    }

    /// Indices the reconstruction queries for this family.
    pub fn indices(self) -> impl Iterator<Item = CoefficientIndex> {
        CoefficientIndex::ALL
            .into_iter()
            .filter(move |idx| idx.families().contains(&self))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::F11 => write!(f, "11"),
            Family::F22 => write!(f, "22"),
        }
    }
}

/// Second-level fit parameters of one coefficient family.
///
/// Each index maps to one row per first-level parameter slot (`a, mu, sig, la`
/// and optionally `b`, `c`), in file order. A row holds the coefficients of the
/// second-level shape assigned to that slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTable {
    rows: BTreeMap<CoefficientIndex, Vec<Vec<f64>>>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next slot row for `index`.
    pub fn push_row(&mut self, index: CoefficientIndex, row: Vec<f64>) {
        self.rows.entry(index).or_default().push(row);
    }

    pub fn rows(&self, index: CoefficientIndex) -> Option<&[Vec<f64>]> {
        self.rows.get(&index).map(Vec::as_slice)
    }

    pub fn contains(&self, index: CoefficientIndex) -> bool {
        self.rows.contains_key(&index)
    }

    pub fn indices(&self) -> impl Iterator<Item = CoefficientIndex> + '_ {
        self.rows.keys().copied()
    }

    /// Number of populated indices.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check every index the reconstruction will query for `family`.
    ///
    /// Keys that are never queried (e.g. `f^22` with `k = 0`) are ignored.
    pub fn validate(&self, family: Family) -> Result<(), Error> {
        for index in family.indices() {
            let rows = self
                .rows(index)
                .ok_or(Error::MissingCoefficient { family, index })?;

            let shape = fourier_shape(index);
            if rows.len() != shape.arity() {
                return Err(Error::SlotCount {
                    family,
                    index,
                    shape: shape.name(),
                    expected: shape.arity(),
                    given: rows.len(),
                });
            }

            for (row, slot) in rows.iter().zip(parameter_shapes(index)) {
                if row.len() != slot.arity() {
                    return Err(Error::Arity {
                        shape: slot.name(),
                        expected: slot.arity(),
                        given: row.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Both coefficient families, as produced by one parameter file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTables {
    pub f11: ParameterTable,
    pub f22: ParameterTable,
}

impl ParameterTables {
    pub fn family(&self, family: Family) -> &ParameterTable {
        match family {
            Family::F11 => &self.f11,
            Family::F22 => &self.f22,
        }
    }

    pub fn family_mut(&mut self, family: Family) -> &mut ParameterTable {
        match family {
            Family::F11 => &mut self.f11,
            Family::F22 => &mut self.f22,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.f11.validate(Family::F11)?;
        self.f22.validate(Family::F22)
    }
}

/// Thermodynamic state: packing density and Péclet number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    pub phi0: f64,
    pub pe: f64,
}

impl StatePoint {
    pub fn new(phi0: f64, pe: f64) -> Self {
        Self { phi0, pe }
    }
}

/// What the `pd` binary evaluates.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Angular map `g(phi1, phi2)` at a single distance.
    Map { r: f64, n_angles: usize },
    /// Radial profile at fixed angles.
    Profile {
        phi1: f64,
        phi2: f64,
        r_min: f64,
        r_max: f64,
        steps: usize,
    },
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, the environment and defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub view: View,
    pub state: StatePoint,
    /// Explicit parameter file; `None` uses the bundled default table.
    pub params_path: Option<PathBuf>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}
