//! Fit-function library.
//!
//! Two levels of closed-form shapes reconstruct each Fourier coefficient:
//!
//! - `FourierShape`: radial profile of one coefficient, `f(r; a, mu, sig, la[, b[, c]])`
//! - `ParameterShape`: dependence of one of those parameters on `(phi0, Pe)`
//!
//! The shapes form a closed set of variants, and the `(k, l)` → shape
//! assignment lives in fixed tables (`assignment`) so evaluation code can stay
//! generic.

pub mod assignment;
pub mod density;
pub mod fourier;

pub use assignment::*;
pub use density::*;
pub use fourier::*;
