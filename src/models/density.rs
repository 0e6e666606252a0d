//! Second-level shapes: dependence of a first-level parameter on `(phi0, Pe)`.
//!
//! Every shape is built from the same Péclet block
//!
//! `P(q; Pe) = q1/Pe + q2/√Pe + q3 + q4·√Pe + q5·Pe`
//!
//! used as the coefficient of each power of the packing density `d = phi0`:
//!
//! - `h2   = P(q1..5) + P(q6..10)·d + P(q11..15)·d²`   (15 parameters)
//! - `h2_0 = h2 + v·exp(w·d)`                          (17 parameters)
//! - `h2_1 = h2 + v·exp(w·d)/Pe`                       (17 parameters)
//! - `h3   = h2 + P(q16..20)·d³`                       (20 parameters)
//!
//! Arity is strict: a row of the wrong length means the table does not belong
//! to this shape assignment, so evaluation fails instead of truncating.

use serde::{Deserialize, Serialize};

use crate::domain::StatePoint;
use crate::error::Error;

/// Coefficients per Péclet block.
const BLOCK: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterShape {
    /// `h2`: quadratic in density.
    H2,
    /// `h2_0`: `h2` plus `v·exp(w·d)`.
    H2Exp,
    /// `h2_1`: `h2` plus `v·exp(w·d)/Pe`.
    H2ExpOverPe,
    /// `h3`: cubic in density.
    H3,
}

impl ParameterShape {
    pub fn name(self) -> &'static str {
        match self {
            ParameterShape::H2 => "h2",
            ParameterShape::H2Exp => "h2_0",
            ParameterShape::H2ExpOverPe => "h2_1",
            ParameterShape::H3 => "h3",
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            ParameterShape::H2 => 3 * BLOCK,
            ParameterShape::H2Exp | ParameterShape::H2ExpOverPe => 3 * BLOCK + 2,
            ParameterShape::H3 => 4 * BLOCK,
        }
    }

    /// Evaluate the shape at `state` with coefficients `q`.
    pub fn eval(self, state: StatePoint, q: &[f64]) -> Result<f64, Error> {
        if q.len() != self.arity() {
            return Err(Error::Arity {
                shape: self.name(),
                expected: self.arity(),
                given: q.len(),
            });
        }

        let StatePoint { phi0: d, pe } = state;
        let base = h2(d, pe, &q[..3 * BLOCK]);

        let value = match self {
            ParameterShape::H2 => base,
            ParameterShape::H2Exp => {
                let (v, w) = (q[15], q[16]);
                base + v * (w * d).exp()
            }
            ParameterShape::H2ExpOverPe => {
                let (v, w) = (q[15], q[16]);
                base + v * (w * d).exp() / pe
            }
            ParameterShape::H3 => base + peclet_block(pe, &q[15..20]) * d.powi(3),
        };
        Ok(value)
    }
}

fn h2(d: f64, pe: f64, q: &[f64]) -> f64 {
    peclet_block(pe, &q[0..5]) + peclet_block(pe, &q[5..10]) * d + peclet_block(pe, &q[10..15]) * d * d
}

fn peclet_block(pe: f64, q: &[f64]) -> f64 {
    let sqrt_pe = pe.sqrt();
    q[0] / pe + q[1] / sqrt_pe + q[2] + q[3] * sqrt_pe + q[4] * pe
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [ParameterShape; 4] = [
        ParameterShape::H2,
        ParameterShape::H2Exp,
        ParameterShape::H2ExpOverPe,
        ParameterShape::H3,
    ];

    fn unit_block_at(slot: usize, len: usize) -> Vec<f64> {
        let mut q = vec![0.0; len];
        q[slot] = 1.0;
        q
    }

    #[test]
    fn arities() {
        assert_eq!(ParameterShape::H2.arity(), 15);
        assert_eq!(ParameterShape::H2Exp.arity(), 17);
        assert_eq!(ParameterShape::H2ExpOverPe.arity(), 17);
        assert_eq!(ParameterShape::H3.arity(), 20);
    }

    #[test]
    fn wrong_parameter_count_is_an_arity_error() {
        let state = StatePoint::new(0.2, 50.0);
        for shape in ALL {
            for len in [0, 15, 16, 17, 18, 19, 20, 21] {
                if len == shape.arity() {
                    continue;
                }
                match shape.eval(state, &vec![0.5; len]) {
                    Err(Error::Arity { shape: name, expected, given }) => {
                        assert_eq!(name, shape.name());
                        assert_eq!(expected, shape.arity());
                        assert_eq!(given, len);
                    }
                    other => panic!("{} with {len} parameters gave {other:?}", shape.name()),
                }
            }
        }
    }

    #[test]
    fn peclet_block_terms() {
        let state = StatePoint::new(0.0, 4.0);
        // d = 0, so only the first block contributes.
        let expected = [1.0 / 4.0, 1.0 / 2.0, 1.0, 2.0, 4.0];
        for (slot, want) in expected.iter().enumerate() {
            let got = ParameterShape::H2.eval(state, &unit_block_at(slot, 15)).unwrap();
            assert_relative_eq!(got, *want);
        }
    }

    #[test]
    fn density_powers() {
        let state = StatePoint::new(0.5, 9.0);
        // Constant term of each block multiplies d^0, d^1, d^2, d^3.
        let h3 = |slot| ParameterShape::H3.eval(state, &unit_block_at(slot, 20)).unwrap();
        assert_relative_eq!(h3(2), 1.0);
        assert_relative_eq!(h3(7), 0.5);
        assert_relative_eq!(h3(12), 0.25);
        assert_relative_eq!(h3(17), 0.125);
    }

    #[test]
    fn exponential_corrections() {
        let state = StatePoint::new(0.3, 20.0);
        let mut q = vec![0.0; 17];
        q[15] = 2.0;
        q[16] = -1.5;
        let plain = 2.0 * (-1.5f64 * 0.3).exp();
        assert_relative_eq!(ParameterShape::H2Exp.eval(state, &q).unwrap(), plain);
        assert_relative_eq!(ParameterShape::H2ExpOverPe.eval(state, &q).unwrap(), plain / 20.0);
    }

    #[test]
    fn extensions_reduce_to_h2_when_extra_terms_vanish() {
        let state = StatePoint::new(0.4, 35.0);
        let q: Vec<f64> = (1..=15).map(|i| 0.1 * i as f64).collect();
        let base = ParameterShape::H2.eval(state, &q).unwrap();

        let mut q17 = q.clone();
        q17.extend([0.0, 3.0]);
        let mut q20 = q.clone();
        q20.extend([0.0; 5]);

        assert_relative_eq!(ParameterShape::H2Exp.eval(state, &q17).unwrap(), base);
        assert_relative_eq!(ParameterShape::H2ExpOverPe.eval(state, &q17).unwrap(), base);
        assert_relative_eq!(ParameterShape::H3.eval(state, &q20).unwrap(), base);
    }
}
