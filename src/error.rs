//! Error types.
//!
//! - `Error` is what the library returns: file I/O, table consistency, shapes.
//! - `AppError` is what the `pd` binary reports: a message plus a process exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{CoefficientIndex, Family};

/// Library-level failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read parameter file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A second-level shape received the wrong number of parameters.
    #[error("{shape} takes exactly {expected} arguments ({given} given)")]
    Arity {
        shape: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("Parameter table has no entry for f^{family}_{index}")]
    MissingCoefficient { family: Family, index: CoefficientIndex },

    #[error("f^{family}_{index} has {given} parameter rows, {shape} needs {expected}")]
    SlotCount {
        family: Family,
        index: CoefficientIndex,
        shape: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("phi1 shape {phi1:?} and phi2 shape {phi2:?} cannot be broadcast together")]
    Shape { phi1: (usize, usize), phi2: (usize, usize) },

    /// A field file whose arrays do not describe one value per `(r, phi1, phi2)`.
    #[error("Inconsistent field file '{}': {message}", path.display())]
    Field { path: PathBuf, message: String },

    #[error("Failed to write '{}': {message}", path.display())]
    Export { path: PathBuf, message: String },
}

impl Error {
    /// Whether this error means the parameter table itself is inconsistent.
    pub fn is_table_error(&self) -> bool {
        matches!(
            self,
            Error::Arity { .. } | Error::MissingCoefficient { .. } | Error::SlotCount { .. }
        )
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        let exit_code = match &err {
            Error::Io { .. } | Error::Parse { .. } | Error::Shape { .. } | Error::Field { .. } => 2,
            Error::Arity { .. } | Error::MissingCoefficient { .. } | Error::SlotCount { .. } => 3,
            Error::Export { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
