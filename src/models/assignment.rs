//! Fixed assignment of fit shapes to coefficient indices.
//!
//! For every `(k, l)` there is one first-level shape and one second-level shape
//! per first-level parameter slot, in slot order `a, mu, sig, la[, b[, c]]`.
//! Both families (`f^11`, `f^22`) share the same assignment.

use crate::domain::CoefficientIndex;
use crate::models::{FourierShape, ParameterShape};

use ParameterShape::{H2, H2Exp, H2ExpOverPe, H3};

const SLOTS_00: [ParameterShape; 4] = [H2ExpOverPe, H2, H2, H2Exp];
const SLOTS_ONE_ROOT: [ParameterShape; 5] = [H3, H2, H2, H2Exp, H3];
const SLOTS_TWO_ROOTS: [ParameterShape; 6] = [H3, H2, H2, H2Exp, H3, H3];

/// First-level shape of the coefficient at `index`.
pub const fn fourier_shape(index: CoefficientIndex) -> FourierShape {
    match (index.k(), index.l()) {
        (0, 0) => FourierShape::Fit0,
        (2, 0) | (2, 1) | (1, 2) => FourierShape::Fit2,
        _ => FourierShape::Fit1,
    }
}

/// Second-level shapes for each parameter slot of `fourier_shape(index)`.
pub const fn parameter_shapes(index: CoefficientIndex) -> &'static [ParameterShape] {
    match fourier_shape(index) {
        FourierShape::Fit0 => &SLOTS_00,
        FourierShape::Fit1 => &SLOTS_ONE_ROOT,
        FourierShape::Fit2 => &SLOTS_TWO_ROOTS,
    }
}

// Slot lists must cover every first-level parameter exactly.
const _: () = {
    let mut i = 0;
    while i < CoefficientIndex::ALL.len() {
        let index = CoefficientIndex::ALL[i];
        assert!(parameter_shapes(index).len() == fourier_shape(index).arity());
        i += 1;
    }
};
