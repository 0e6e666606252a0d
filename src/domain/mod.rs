//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - coefficient addressing (`CoefficientIndex`, `Family`)
//! - loaded fit parameters (`ParameterTable`, `ParameterTables`)
//! - physical inputs and advisory bounds checks (`StatePoint`, `InputWarning`)
//! - resolved run configuration for the `pd` binary (`RunConfig`)

pub mod bounds;
pub mod types;

pub use bounds::*;
pub use types::*;
