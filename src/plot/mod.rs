//! Terminal plots: angular heatmap and radial profile.

pub mod ascii;

pub use ascii::*;
