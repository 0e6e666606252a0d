//! Shared evaluation pipeline used by the `map` and `profile` commands.
//!
//! parameter source -> input grid -> advisory checks -> reconstruction -> `g`
//!
//! The command handlers then focus on presentation (printing, plots, exports).

use std::f64::consts::PI;
use std::path::PathBuf;

use ndarray::{Array3, Axis};

use crate::domain::{InputWarning, RunConfig, View, check_inputs};
use crate::error::AppError;
use crate::io::{RowWarning, load_parameter_file};
use crate::math::{linspace, u2_prime};
use crate::reconstruct::{AngleGrid, DefaultTables, reconstruct};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Parameter file the tables came from.
    pub source: PathBuf,
    pub table_warnings: Vec<RowWarning>,
    pub input_warnings: Vec<InputWarning>,
    pub r: Vec<f64>,
    pub angles: AngleGrid,
    /// `-gU'_2`, shape `(r.len(), rows, cols)`.
    pub mgu2: Array3<f64>,
    /// Pair-distribution function, same shape as `mgu2`.
    pub g: Array3<f64>,
}

/// Distances and angles requested by a view.
pub fn view_inputs(view: &View) -> (Vec<f64>, AngleGrid) {
    match *view {
        View::Map { r, n_angles } => {
            let phi1 = linspace(-PI, PI, n_angles, false);
            let phi2 = linspace(0.0, 2.0 * PI, n_angles, false);
            (vec![r], AngleGrid::meshgrid(&phi1, &phi2))
        }
        View::Profile {
            phi1,
            phi2,
            r_min,
            r_max,
            steps,
        } => (linspace(r_min, r_max, steps, true), AngleGrid::point(phi1, phi2)),
    }
}

/// Divide `-gU'_2` by `U'_2(r)` to obtain `g`.
pub fn pair_distribution(r: &[f64], mgu2: &Array3<f64>) -> Array3<f64> {
    let mut g = mgu2.clone();
    for (mut slab, &dist) in g.axis_iter_mut(Axis(0)).zip(r) {
        let u2 = u2_prime(dist);
        slab.mapv_inplace(|v| -v / u2);
    }
    g
}

/// Execute the full pipeline for `config.view`.
pub fn run_view(config: &RunConfig) -> Result<RunOutput, AppError> {
    let explicit = match &config.params_path {
        Some(path) => Some((path.clone(), load_parameter_file(path)?)),
        None => None,
    };
    let tables = explicit.as_ref().map(|(_, loaded)| &loaded.tables);

    let (r, angles) = view_inputs(&config.view);
    let input_warnings = check_inputs(&r, config.state);

    // With no explicit file both tables come from the shared default cache.
    let mgu2 = reconstruct(
        &r,
        &angles,
        config.state,
        tables.map(|t| &t.f11),
        tables.map(|t| &t.f22),
    )?;

    if mgu2.iter().any(|v| !v.is_finite()) {
        return Err(AppError::new(4, "Non-finite value in reconstructed field."));
    }
    let g = pair_distribution(&r, &mgu2);

    let (source, table_warnings) = match explicit {
        Some((path, loaded)) => (path, loaded.warnings),
        None => {
            let defaults = DefaultTables::global();
            (defaults.path().to_path_buf(), defaults.warnings().to_vec())
        }
    };

    Ok(RunOutput {
        source,
        table_warnings,
        input_warnings,
        r,
        angles,
        mgu2,
        g,
    })
}
