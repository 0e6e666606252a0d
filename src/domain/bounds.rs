//! Advisory range checks for physical inputs.
//!
//! The reconstruction itself never clamps or rejects inputs. Front-ends call
//! `check_inputs` and decide what to do with the warnings (the `pd` binary
//! prints them and carries on).

use std::fmt;

use crate::domain::StatePoint;
use crate::math::{R_APPROX_MAX, R_APPROX_MIN};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputWarning {
    /// A distance lies outside `[R_APPROX_MIN, R_APPROX_MAX]`.
    DistanceOutOfBounds(f64),
    NegativePeclet(f64),
    DensityOutOfRange(f64),
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::DistanceOutOfBounds(r) => {
                write!(f, "Distance {r} is outside of approximation bounds!")
            }
            InputWarning::NegativePeclet(pe) => {
                write!(f, "Unphysical argument for Peclet number ({pe})")
            }
            InputWarning::DensityOutOfRange(phi0) => {
                write!(f, "Unphysical argument for packing density ({phi0})")
            }
        }
    }
}

/// Collect advisory warnings for the requested distances and state point.
///
/// At most one distance warning is reported (the first offending value).
pub fn check_inputs(r: &[f64], state: StatePoint) -> Vec<InputWarning> {
    let mut warnings = Vec::new();

    if let Some(&bad) = r
        .iter()
        .find(|&&r| !(R_APPROX_MIN..=R_APPROX_MAX).contains(&r))
    {
        warnings.push(InputWarning::DistanceOutOfBounds(bad));
    }
    if state.pe < 0.0 {
        warnings.push(InputWarning::NegativePeclet(state.pe));
    }
    if !(0.0..=1.0).contains(&state.phi0) {
        warnings.push(InputWarning::DensityOutOfRange(state.phi0));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_inputs_produce_no_warnings() {
        let warnings = check_inputs(&[0.8, 1.0, R_APPROX_MAX], StatePoint::new(0.2, 50.0));
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn each_violation_is_reported() {
        let warnings = check_inputs(&[1.0, 1.5, 2.0], StatePoint::new(1.2, -1.0));
        assert_eq!(
            warnings,
            vec![
                InputWarning::DistanceOutOfBounds(1.5),
                InputWarning::NegativePeclet(-1.0),
                InputWarning::DensityOutOfRange(1.2),
            ]
        );
    }

    #[test]
    fn nan_distance_is_out_of_bounds() {
        let warnings = check_inputs(&[f64::NAN], StatePoint::new(0.2, 50.0));
        assert_eq!(warnings.len(), 1);
    }
}
