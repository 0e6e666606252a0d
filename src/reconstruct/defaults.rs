//! Memoized default parameter table.
//!
//! The bundled table is read on first use and then shared, read-only, for the
//! rest of the process. Callers that pass their own tables to `reconstruct`
//! never trigger the load.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::{Lazy, OnceCell};

use crate::domain::ParameterTables;
use crate::error::Error;
use crate::io::{LoadedParameters, RowWarning, load_parameter_file};

/// File name of the bundled table under `data/`.
pub const DEFAULT_PARAMETER_FILE: &str = "fit_parameters.csv";

/// Location of the bundled table.
pub fn bundled_parameter_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(DEFAULT_PARAMETER_FILE)
}

static GLOBAL: Lazy<DefaultTables> = Lazy::new(|| DefaultTables::new(bundled_parameter_path()));

/// Load-once cache of a parameter file.
///
/// A failed load leaves the cache empty, so the next access retries.
#[derive(Debug)]
pub struct DefaultTables {
    path: PathBuf,
    cell: OnceCell<LoadedParameters>,
    loads: AtomicUsize,
}

impl DefaultTables {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// The process-wide cache over the bundled table.
    pub fn global() -> &'static DefaultTables {
        &GLOBAL
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loaded file contents, reading the file if this is the first access.
    pub fn loaded(&self) -> Result<&LoadedParameters, Error> {
        self.cell.get_or_try_init(|| {
            self.loads.fetch_add(1, Ordering::Relaxed);
            load_parameter_file(&self.path)
        })
    }

    pub fn tables(&self) -> Result<&ParameterTables, Error> {
        self.loaded().map(|loaded| &loaded.tables)
    }

    /// Rows skipped during the load (empty before the first load).
    pub fn warnings(&self) -> &[RowWarning] {
        self.cell
            .get()
            .map(|loaded| loaded.warnings.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Number of times the file has been read.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}
