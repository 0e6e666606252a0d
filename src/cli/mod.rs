//! Command-line parsing for the `pd` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! reconstruction code. Range validation of physical inputs is advisory and
//! happens in the pipeline, not here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::math::{R_APPROX_MAX, R_APPROX_MIN};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pd",
    version,
    about = "Pair-distribution function of 2D active Brownian particles from fitted parameters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show g(phi1, phi2) at a single particle distance.
    Map(MapArgs),
    /// Show -gU'_2 and g over a range of distances at fixed angles.
    Profile(ProfileArgs),
    /// Re-render a field JSON written with `--export-json`.
    Plot(PlotArgs),
    /// Load a parameter file and check it against the fit-shape assignment.
    Check(CheckArgs),
}

/// Thermodynamic state and parameter source.
#[derive(Debug, Args, Clone)]
pub struct StateArgs {
    /// Packing density.
    #[arg(short = 'd', long = "phi0", default_value_t = 0.2, allow_negative_numbers = true)]
    pub phi0: f64,

    /// Peclet number.
    #[arg(short = 'p', long = "peclet", default_value_t = 50.0, allow_negative_numbers = true)]
    pub peclet: f64,

    /// Parameter CSV (default: $PD_PARAMETERS, then the bundled table).
    #[arg(long, value_name = "CSV")]
    pub params: Option<PathBuf>,
}

/// Plot and export options.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 36)]
    pub height: usize,

    /// Export the field to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the field (with inputs and grid) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct MapArgs {
    /// Particle distance in multiples of sigma.
    #[arg(short = 'r', long = "dist", default_value_t = 1.0, allow_negative_numbers = true)]
    pub dist: f64,

    /// Number of samples per angle.
    #[arg(long, default_value_t = 180)]
    pub n_angles: usize,

    #[command(flatten)]
    pub state: StateArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct ProfileArgs {
    /// Positional angle.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub phi1: f64,

    /// Orientational angle.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub phi2: f64,

    /// Smallest distance.
    #[arg(long, default_value_t = R_APPROX_MIN)]
    pub r_min: f64,

    /// Largest distance.
    #[arg(long, default_value_t = R_APPROX_MAX)]
    pub r_max: f64,

    /// Number of distances (endpoints included).
    #[arg(long, default_value_t = 50)]
    pub steps: usize,

    #[command(flatten)]
    pub state: StateArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Field JSON produced by `--export-json`.
    #[arg(long, value_name = "JSON")]
    pub field: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 36)]
    pub height: usize,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Parameter CSV (default: $PD_PARAMETERS, then the bundled table).
    #[arg(long, value_name = "CSV")]
    pub params: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_defaults_match_reference_figure() {
        let cli = Cli::parse_from(["pd", "map"]);
        let Command::Map(args) = cli.command else {
            panic!("expected map");
        };
        assert_eq!(args.dist, 1.0);
        assert_eq!(args.state.phi0, 0.2);
        assert_eq!(args.state.peclet, 50.0);
        assert_eq!(args.n_angles, 180);
    }

    #[test]
    fn negative_values_are_accepted() {
        let cli = Cli::parse_from(["pd", "profile", "--phi1", "-1.5", "-p", "-3"]);
        let Command::Profile(args) = cli.command else {
            panic!("expected profile");
        };
        assert_eq!(args.phi1, -1.5);
        assert_eq!(args.state.peclet, -3.0);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
