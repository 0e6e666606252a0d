//! First-level shapes: radial profile of a Fourier coefficient.
//!
//! All three share the EMG envelope and a fixed root at `r = 2^(1/6)`, where
//! the repulsive potential is cut off:
//!
//! - `Fit0(r; a, mu, sig, la)       = a · EMG(r; mu, sig, la) · (2^(1/6) − r)`
//! - `Fit1(r; a, mu, sig, la, b)    = Fit0 · (r − b)`
//! - `Fit2(r; a, mu, sig, la, b, c) = Fit1 · (r − c)`

use serde::{Deserialize, Serialize};

use crate::math::{R_APPROX_MAX, emg};

/// Radial fit shape of one Fourier coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FourierShape {
    /// Fixed root only.
    Fit0,
    /// Fixed root plus one free root `b`.
    Fit1,
    /// Fixed root plus free roots `b` and `c`.
    Fit2,
}

impl FourierShape {
    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            FourierShape::Fit0 => "FourierFit0",
            FourierShape::Fit1 => "FourierFit1",
            FourierShape::Fit2 => "FourierFit2",
        }
    }

    /// Number of parameters (`a, mu, sig, la` plus free roots).
    pub const fn arity(self) -> usize {
        match self {
            FourierShape::Fit0 => 4,
            FourierShape::Fit1 => 5,
            FourierShape::Fit2 => 6,
        }
    }

    /// Conventional names of the parameter slots, in table order.
    pub fn slot_names(self) -> &'static [&'static str] {
        const SLOTS: [&str; 6] = ["a", "mu", "sig", "la", "b", "c"];
        &SLOTS[..self.arity()]
    }

    /// Evaluate the coefficient at distance `r`.
    ///
    /// # Panics
    /// Panics if `params` is shorter than `self.arity()`. Tables are validated
    /// before evaluation, so callers always pass the full slot list.
    pub fn eval(self, r: f64, params: &[f64]) -> f64 {
        let (a, mu, sig, la) = (params[0], params[1], params[2], params[3]);
        let fit0 = a * emg(r, mu, sig, la) * (R_APPROX_MAX - r);
        match self {
            FourierShape::Fit0 => fit0,
            FourierShape::Fit1 => fit0 * (r - params[4]),
            FourierShape::Fit2 => fit0 * (r - params[4]) * (r - params[5]),
        }
    }
}
