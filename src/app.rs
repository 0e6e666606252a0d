//! The `pd` front-end.
//!
//! `main` only maps the returned `AppError` to an exit code. Everything else
//! happens here: argument parsing, choosing the parameter file (flag,
//! environment, bundled table), running the pipeline, then printing warnings,
//! summaries and plots and writing the requested exports.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::{CheckArgs, Command, MapArgs, OutputArgs, PlotArgs, ProfileArgs, StateArgs};
use crate::domain::{RunConfig, StatePoint, View};
use crate::error::AppError;
use crate::io::{FieldFile, load_parameter_file, read_field_json, write_field_csv, write_field_json};
use crate::reconstruct::{DefaultTables, bundled_parameter_path};

pub mod pipeline;

/// Environment variable naming a parameter CSV to use instead of the bundled one.
pub const PARAMS_ENV: &str = "PD_PARAMETERS";

/// Entry point for the `pd` binary.
pub fn run() -> Result<(), AppError> {
    // `pd` and `pd -r 1.0 ...` behave like `pd map ...`. Clap requires a
    // subcommand name, so argv is rewritten before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Map(args) => handle_view(map_config(&args)),
        Command::Profile(args) => handle_view(profile_config(&args)),
        Command::Plot(args) => handle_plot(args),
        Command::Check(args) => handle_check(args),
    }
}

fn handle_view(config: RunConfig) -> Result<(), AppError> {
    let run = pipeline::run_view(&config)?;

    eprint!("{}", crate::report::format_row_warnings(&run.table_warnings));
    for warning in &run.input_warnings {
        eprintln!("Warning: {warning}");
    }

    println!("{}", crate::report::format_run_summary(&run, &config));

    match &config.view {
        View::Map { .. } => {
            if config.plot {
                let g = run.g.index_axis(ndarray::Axis(0), 0).to_owned();
                println!(
                    "{}",
                    crate::plot::render_heatmap(
                        &g,
                        (-std::f64::consts::PI, std::f64::consts::PI),
                        (0.0, 2.0 * std::f64::consts::PI),
                        config.plot_width,
                        config.plot_height,
                    )
                );
            }
        }
        View::Profile { .. } => {
            println!("{}", crate::report::format_profile(&run));
            if config.plot {
                let points: Vec<(f64, f64)> = run
                    .r
                    .iter()
                    .enumerate()
                    .map(|(i, &r)| (r, run.g[[i, 0, 0]]))
                    .collect();
                println!(
                    "{}",
                    crate::plot::render_profile(&points, "g", config.plot_width, config.plot_height)
                );
            }
        }
    }

    if let Some(path) = &config.export_csv {
        write_field_csv(path, &run.r, &run.angles, &run.mgu2)?;
    }
    if let Some(path) = &config.export_json {
        let field = FieldFile::new(config.state, &run.source, &run.r, &run.angles, run.mgu2.clone());
        write_field_json(path, &field)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let field = read_field_json(&args.field)?;
    let angles = field.angles()?;
    let g = pipeline::pair_distribution(&field.r, &field.mgu2);

    let (rows, cols) = angles.shape();
    let plot = if field.r.len() == 1 && rows * cols > 1 {
        let g = g.index_axis(ndarray::Axis(0), 0).to_owned();
        let range = |values: &ndarray::Array2<f64>| {
            values
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
        };
        crate::plot::render_heatmap(&g, range(&field.phi1), range(&field.phi2), args.width, args.height)
    } else {
        let points: Vec<(f64, f64)> = field
            .r
            .iter()
            .enumerate()
            .map(|(i, &r)| (r, g[[i, 0, 0]]))
            .collect();
        crate::plot::render_profile(&points, "g", args.width, args.height)
    };

    println!("{plot}");
    Ok(())
}

fn handle_check(args: CheckArgs) -> Result<(), AppError> {
    let path = resolve_params_path(args.params).unwrap_or_else(bundled_parameter_path);
    let loaded = load_parameter_file(&path)?;

    eprint!("{}", crate::report::format_row_warnings(&loaded.warnings));
    println!("{}", crate::report::format_check(&path, &loaded));

    loaded.tables.validate()?;
    println!("OK: every coefficient matches its fit-shape assignment.");
    Ok(())
}

pub fn map_config(args: &MapArgs) -> RunConfig {
    run_config(
        View::Map {
            r: args.dist,
            n_angles: args.n_angles,
        },
        &args.state,
        &args.output,
    )
}

pub fn profile_config(args: &ProfileArgs) -> RunConfig {
    run_config(
        View::Profile {
            phi1: args.phi1,
            phi2: args.phi2,
            r_min: args.r_min,
            r_max: args.r_max,
            steps: args.steps,
        },
        &args.state,
        &args.output,
    )
}

fn run_config(view: View, state: &StateArgs, output: &OutputArgs) -> RunConfig {
    RunConfig {
        view,
        state: StatePoint::new(state.phi0, state.peclet),
        params_path: resolve_params_path(state.params.clone()),
        plot: !output.no_plot,
        plot_width: output.width,
        plot_height: output.height,
        export_csv: output.export.clone(),
        export_json: output.export_json.clone(),
    }
}

/// Explicit flag first, then `PD_PARAMETERS` (a `.env` file is honoured).
///
/// `None` means the bundled default table, shared via `DefaultTables::global()`.
pub fn resolve_params_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| {
        dotenvy::dotenv().ok();
        std::env::var_os(PARAMS_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
    .filter(|path| !is_bundled(path))
}

fn is_bundled(path: &Path) -> bool {
    path == DefaultTables::global().path()
}

/// Rewrite argv so `pd` defaults to `pd map`.
///
/// Rules:
/// - `pd`                      -> `pd map`
/// - `pd -r 1.0 ...`           -> `pd map -r 1.0 ...`
/// - `pd --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("map".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "map".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_map() {
        assert_eq!(rewrite_args(argv(&["pd"])), argv(&["pd", "map"]));
        assert_eq!(
            rewrite_args(argv(&["pd", "-r", "0.9"])),
            argv(&["pd", "map", "-r", "0.9"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(rewrite_args(argv(&["pd", "--help"])), argv(&["pd", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["pd", "profile", "--steps", "3"])),
            argv(&["pd", "profile", "--steps", "3"])
        );
    }

    #[test]
    fn explicit_flag_wins() {
        let path = PathBuf::from("custom.csv");
        assert_eq!(resolve_params_path(Some(path.clone())), Some(path));
    }

    #[test]
    fn bundled_path_uses_shared_cache() {
        assert_eq!(resolve_params_path(Some(bundled_parameter_path())), None);
    }
}
