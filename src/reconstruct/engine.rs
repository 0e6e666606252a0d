//! Series evaluation.
//!
//! `-gU'_2(r, phi1, phi2) = Σ_kl f^11_kl(r)·cos(k·phi1)·cos(l·phi2)
//!                        + Σ_{k,l>0} f^22_kl(r)·sin(k·phi1)·sin(l·phi2)`
//!
//! Each `f_kl(r)` is a first-level shape whose parameters come from applying
//! the assigned second-level shapes to `(phi0, Pe)`.

use ndarray::{Array1, Array3};

use crate::domain::{CoefficientIndex, Family, ParameterTable, ParameterTables, StatePoint};
use crate::error::Error;
use crate::models::{fourier_shape, parameter_shapes};
use crate::reconstruct::{AngleGrid, DefaultTables};

/// Evaluates the series over a pair of validated parameter tables.
///
/// Both tables are checked once in the constructor against the assignment
/// tables, so a missing coefficient or wrong row length fails before any
/// evaluation starts.
#[derive(Debug, Clone, Copy)]
pub struct Reconstructor<'a> {
    f11: &'a ParameterTable,
    f22: &'a ParameterTable,
}

impl<'a> Reconstructor<'a> {
    pub fn new(f11: &'a ParameterTable, f22: &'a ParameterTable) -> Result<Self, Error> {
        f11.validate(Family::F11)?;
        f22.validate(Family::F22)?;
        Ok(Self { f11, f22 })
    }

    pub fn from_tables(tables: &'a ParameterTables) -> Result<Self, Error> {
        Self::new(&tables.f11, &tables.f22)
    }

    fn table(&self, family: Family) -> &'a ParameterTable {
        match family {
            Family::F11 => self.f11,
            Family::F22 => self.f22,
        }
    }

    /// First-level parameters (`a, mu, sig, la[, b[, c]]`) of one coefficient at `state`.
    pub fn fit_parameters(
        &self,
        family: Family,
        index: CoefficientIndex,
        state: StatePoint,
    ) -> Result<Vec<f64>, Error> {
        let rows = self
            .table(family)
            .rows(index)
            .ok_or(Error::MissingCoefficient { family, index })?;

        parameter_shapes(index)
            .iter()
            .zip(rows)
            .map(|(shape, q)| shape.eval(state, q))
            .collect()
    }

    /// Radial profile `f_kl(r)` of one coefficient at `state`.
    pub fn fourier_coefficient(
        &self,
        family: Family,
        index: CoefficientIndex,
        r: &[f64],
        state: StatePoint,
    ) -> Result<Array1<f64>, Error> {
        let params = self.fit_parameters(family, index, state)?;
        let shape = fourier_shape(index);
        Ok(r.iter().map(|&r| shape.eval(r, &params)).collect())
    }

    /// `-gU'_2` with shape `(r.len(), rows, cols)` of `angles`.
    ///
    /// No range checks are applied; see `domain::check_inputs`.
    pub fn field(&self, r: &[f64], angles: &AngleGrid, state: StatePoint) -> Result<Array3<f64>, Error> {
        let (rows, cols) = angles.shape();
        let mut field = Array3::<f64>::zeros((r.len(), rows, cols));

        for index in CoefficientIndex::ALL {
            for &family in index.families() {
                let coeff = self.fourier_coefficient(family, index, r, state)?;
                let angular = angles.map(|phi1, phi2| family.angular(index, phi1, phi2));

                for (mut slab, &c) in field.outer_iter_mut().zip(coeff.iter()) {
                    slab.scaled_add(c, &angular);
                }
            }
        }

        Ok(field)
    }
}

/// Reconstruct `-gU'_2` at every `(r, phi1, phi2)` combination.
///
/// Missing tables are taken from the process-wide default
/// (`DefaultTables::global()`), which is read from disk on first use only.
/// Passing both tables never touches the default.
pub fn reconstruct(
    r: &[f64],
    angles: &AngleGrid,
    state: StatePoint,
    f11: Option<&ParameterTable>,
    f22: Option<&ParameterTable>,
) -> Result<Array3<f64>, Error> {
    let (f11, f22) = match (f11, f22) {
        (Some(f11), Some(f22)) => (f11, f22),
        (f11, f22) => {
            let defaults = DefaultTables::global().tables()?;
            (f11.unwrap_or(&defaults.f11), f22.unwrap_or(&defaults.f22))
        }
    };
    Reconstructor::new(f11, f22)?.field(r, angles, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::math::R_APPROX_MAX;
    use crate::models::ParameterShape;

    /// Row for `shape` whose value is the constant `value` at every state.
    fn constant_row(shape: ParameterShape, value: f64) -> Vec<f64> {
        let mut q = vec![0.0; shape.arity()];
        q[2] = value;
        q
    }

    /// Tables where every coefficient has the same envelope and amplitude.
    fn uniform_tables(amplitude: f64) -> ParameterTables {
        let mut tables = ParameterTables::default();
        for family in [Family::F11, Family::F22] {
            for index in family.indices() {
                let values = [amplitude, 0.98, 0.04, 12.0, 0.9, 1.05];
                for (slot, shape) in parameter_shapes(index).iter().enumerate() {
                    tables
                        .family_mut(family)
                        .push_row(index, constant_row(*shape, values[slot]));
                }
            }
        }
        tables
    }

    fn idx(k: u8, l: u8) -> CoefficientIndex {
        CoefficientIndex::new(k, l).unwrap()
    }

    #[test]
    fn fit_parameters_follow_slot_rows() {
        let tables = uniform_tables(3.0);
        let rec = Reconstructor::from_tables(&tables).unwrap();
        let params = rec
            .fit_parameters(Family::F11, idx(2, 1), StatePoint::new(0.2, 50.0))
            .unwrap();
        assert_eq!(params.len(), 6);
        for (got, want) in params.iter().zip([3.0, 0.98, 0.04, 12.0, 0.9, 1.05]) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
    }

    #[test]
    fn field_shape_follows_inputs() {
        let tables = uniform_tables(1.0);
        let rec = Reconstructor::from_tables(&tables).unwrap();
        let angles = AngleGrid::meshgrid(&[0.0, 0.5, 1.0], &[0.0, 2.0]);
        let field = rec
            .field(&[0.8, 0.9, 1.0, 1.1], &angles, StatePoint::new(0.2, 50.0))
            .unwrap();
        assert_eq!(field.dim(), (4, 2, 3));
    }

    #[test]
    fn field_at_zero_angles_sums_cosine_coefficients() {
        let tables = uniform_tables(1.0);
        let rec = Reconstructor::from_tables(&tables).unwrap();
        let state = StatePoint::new(0.2, 50.0);
        let r = [0.95];

        let expected: f64 = CoefficientIndex::ALL
            .iter()
            .map(|&i| rec.fourier_coefficient(Family::F11, i, &r, state).unwrap()[0])
            .sum();
        let field = rec.field(&r, &AngleGrid::point(0.0, 0.0), state).unwrap();
        assert_relative_eq!(field[[0, 0, 0]], expected, max_relative = 1e-12);
    }

    #[test]
    fn field_vanishes_at_cutoff() {
        let tables = uniform_tables(5.0);
        let rec = Reconstructor::from_tables(&tables).unwrap();
        let angles = AngleGrid::meshgrid(&[-1.0, 0.3], &[0.2, 2.5]);
        let field = rec
            .field(&[R_APPROX_MAX], &angles, StatePoint::new(0.4, 10.0))
            .unwrap();
        assert!(field.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn constructor_rejects_missing_coefficient() {
        let mut tables = uniform_tables(1.0);
        tables.f22 = ParameterTable::new();
        let err = Reconstructor::from_tables(&tables).unwrap_err();
        assert!(matches!(err, Error::MissingCoefficient { family: Family::F22, .. }));
    }

    #[test]
    fn constructor_rejects_wrong_row_length() {
        let mut tables = uniform_tables(1.0);
        // One extra coefficient on the h2_0 slot of f^11_00.
        let mut f11 = ParameterTable::new();
        for index in Family::F11.indices() {
            for (slot, row) in tables.f11.rows(index).unwrap().iter().enumerate() {
                let mut row = row.clone();
                if index == idx(0, 0) && slot == 3 {
                    row.push(0.0);
                }
                f11.push_row(index, row);
            }
        }
        tables.f11 = f11;

        match Reconstructor::from_tables(&tables).unwrap_err() {
            Error::Arity { shape, expected, given } => {
                assert_eq!(shape, "h2_0");
                assert_eq!(expected, 17);
                assert_eq!(given, 18);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn explicit_tables_bypass_default() {
        let tables = uniform_tables(2.0);
        let field = reconstruct(
            &[0.9],
            &AngleGrid::point(0.1, 0.2),
            StatePoint::new(0.3, 20.0),
            Some(&tables.f11),
            Some(&tables.f22),
        )
        .unwrap();
        assert!(field[[0, 0, 0]].is_finite());
    }
}
