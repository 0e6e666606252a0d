//! Mathematical utilities: EMG envelope, pair potential, grids.

pub mod emg;
pub mod grid;
pub mod potential;

pub use emg::*;
pub use grid::*;
pub use potential::*;
