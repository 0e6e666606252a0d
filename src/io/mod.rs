//! Input/output helpers.
//!
//! - parameter CSV ingest (`ingest`)
//! - parameter CSV writer + field CSV export (`export`)
//! - field JSON read/write (`field`)

pub mod export;
pub mod field;
pub mod ingest;

pub use export::*;
pub use field::*;
pub use ingest::*;
