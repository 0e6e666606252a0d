//! Exponentially modified Gaussian (EMG) envelope.
//!
//! `EMG(r; mu, sig, la) = la/2 · exp(la/2 · (la·sig² − 2(r − mu))) · erfc((la·sig² − (r − mu)) / (√2·sig))`
//!
//! This is the radial envelope shared by every first-level Fourier fit. It is
//! evaluated exactly as written; for the parameter ranges the tables produce
//! the exponential and the erfc stay well inside `f64` range.

use statrs::function::erf::erfc;

/// Evaluate the EMG density at `r`.
pub fn emg(r: f64, mu: f64, sig: f64, la: f64) -> f64 {
    let shift = la * sig * sig;
    let growth = (la / 2.0 * (shift - 2.0 * (r - mu))).exp();
    let tail = erfc((shift - (r - mu)) / std::f64::consts::SQRT_2 / sig);
    la / 2.0 * growth * tail
}
