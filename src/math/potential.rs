//! Lennard-Jones-type pair potential used by the accompanying simulations.
//!
//! `U'_2(r) = 24·ε/σ · (−2·(σ/r)^13 + (σ/r)^7)`
//!
//! Dividing `-gU'_2` by `U'_2` recovers the pair-distribution function `g`.

/// Lennard-Jones energy.
pub const EPSILON: f64 = 1.0;

/// Particle diameter.
pub const SIGMA: f64 = 1.0;

/// Lower distance bound of the fitted approximation.
pub const R_APPROX_MIN: f64 = 0.7775;

/// Cut-off of the purely repulsive potential, `2^(1/6)·σ`. Every Fourier
/// coefficient vanishes here.
pub const R_APPROX_MAX: f64 = 1.122_462_048_309_373;

/// Derivative of the pair potential with respect to `r` (`r > 0`).
pub fn u2_prime(r: f64) -> f64 {
    let x = SIGMA / r;
    24.0 * EPSILON / SIGMA * (-2.0 * x.powi(13) + x.powi(7))
}
