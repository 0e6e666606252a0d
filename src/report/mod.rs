//! Reporting utilities: run summaries, profile tables and table diagnostics.
//!
//! Formatting code lives in one place so the reconstruction code stays clean
//! and output changes are localized.

pub mod format;

pub use format::*;
