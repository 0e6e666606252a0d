//! Reconstruction of `-gU'_2` from fitted parameters.
//!
//! Responsibilities:
//!
//! - define the angle broadcasting contract (`AngleGrid`)
//! - evaluate the two-level fit model per coefficient and sum the series (`Reconstructor`)
//! - memoize the bundled default table (`DefaultTables`)

pub mod defaults;
pub mod engine;
pub mod grid;

pub use defaults::*;
pub use engine::*;
pub use grid::*;
