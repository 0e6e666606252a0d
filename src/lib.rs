//! `abp-pairdist` library crate.
//!
//! Reconstructs `-gU'_2`, the negative product of the pair-distribution
//! function and the pair-potential derivative, for a 2D suspension of active
//! Brownian particles from a table of fitted parameters.
//!
//! The binary (`pd`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the reconstruction can be embedded elsewhere without the CLI

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod reconstruct;
pub mod report;

pub use domain::{CoefficientIndex, Family, ParameterTable, ParameterTables, StatePoint};
pub use error::Error;
pub use reconstruct::{AngleGrid, DefaultTables, Reconstructor, reconstruct};
