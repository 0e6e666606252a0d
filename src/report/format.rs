//! Formatted terminal output.

use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::{CoefficientIndex, Family, ParameterTables, RunConfig, View};
use crate::io::{LoadedParameters, RowWarning};
use crate::math::u2_prime;

/// Format the run summary (inputs, parameter source, field range).
pub fn format_run_summary(run: &RunOutput, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== pd - pair distribution of active Brownian particles ===\n");
    out.push_str(&format!(
        "State: phi0={} | Pe={}\n",
        config.state.phi0, config.state.pe
    ));
    out.push_str(&format!("Parameters: {}\n", run.source.display()));

    match &config.view {
        View::Map { r, n_angles } => {
            out.push_str(&format!(
                "Map: r={r} | {n_angles}x{n_angles} angles | U'_2(r)={:.6}\n",
                u2_prime(*r)
            ));
        }
        View::Profile {
            phi1, phi2, steps, ..
        } => {
            out.push_str(&format!(
                "Profile: phi1={phi1} | phi2={phi2} | {steps} distances\n"
            ));
        }
    }

    if let Some((min, max, mean)) = stats(run.g.iter().copied()) {
        out.push_str(&format!("g: min={min:.6} max={max:.6} mean={mean:.6}\n"));
    }

    out
}

/// Format the radial profile as a table.
pub fn format_profile(run: &RunOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10} {:>16} {:>16} {:>14}\n",
        "r", "-gU'_2", "U'_2", "g"
    ));
    out.push_str(&format!("{:-<10} {:-<16} {:-<16} {:-<14}\n", "", "", "", ""));

    for (i, &r) in run.r.iter().enumerate() {
        out.push_str(&format!(
            "{:>10.5} {:>16.6e} {:>16.6e} {:>14.6}\n",
            r,
            run.mgu2[[i, 0, 0]],
            u2_prime(r),
            run.g[[i, 0, 0]]
        ));
    }

    out
}

/// Format skipped rows as `Warning:` lines.
pub fn format_row_warnings(warnings: &[RowWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("Warning: line {}: {}\n", w.line, w.message))
        .collect()
}

/// Format the result of `pd check`.
pub fn format_check(path: &Path, loaded: &LoadedParameters) -> String {
    let mut out = String::new();

    out.push_str(&format!("Parameter file: {}\n", path.display()));
    out.push_str(&format!(
        "Rows: read={} used={} skipped={}\n",
        loaded.rows_read,
        loaded.rows_used,
        loaded.warnings.len()
    ));
    out.push_str(&format_coverage(&loaded.tables));
    out
}

/// Per-coefficient row counts, `-` for absent entries.
fn format_coverage(tables: &ParameterTables) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<8} {:>6} {:>6}\n", "index", "f^11", "f^22"));
    for index in CoefficientIndex::ALL {
        let count = |family: Family| -> String {
            match tables.family(family).rows(index) {
                Some(rows) => rows.len().to_string(),
                None => "-".to_string(),
            }
        };
        out.push_str(&format!(
            "{:<8} {:>6} {:>6}\n",
            index.to_string(),
            count(Family::F11),
            count(Family::F22)
        ));
    }
    out
}

fn stats(values: impl Iterator<Item = f64>) -> Option<(f64, f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
        n += 1;
    }
    (n > 0).then(|| (min, max, sum / n as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_parameter_file;

    #[test]
    fn row_warnings_are_prefixed() {
        let warnings = vec![RowWarning {
            line: 3,
            label: "f^11_0".to_string(),
            message: "Invalid Fourier coefficient label: f^11_0".to_string(),
        }];
        assert_eq!(
            format_row_warnings(&warnings),
            "Warning: line 3: Invalid Fourier coefficient label: f^11_0\n"
        );
    }

    #[test]
    fn coverage_marks_absent_entries() {
        let loaded = parse_parameter_file(
            "f^11_00,a,1\nf^11_00,mu,1\nf^22_12,a,1\n".as_bytes(),
            Path::new("inline.csv"),
        )
        .unwrap();
        let txt = format_check(Path::new("inline.csv"), &loaded);
        assert!(txt.contains("Rows: read=3 used=3 skipped=0"));
        let line_00 = txt.lines().find(|l| l.starts_with("00")).unwrap();
        assert_eq!(line_00.split_whitespace().collect::<Vec<_>>(), ["00", "2", "-"]);
        let line_12 = txt.lines().find(|l| l.starts_with("12")).unwrap();
        assert_eq!(line_12.split_whitespace().collect::<Vec<_>>(), ["12", "-", "1"]);
    }

    #[test]
    fn stats_of_empty_input() {
        assert!(stats(std::iter::empty()).is_none());
        assert_eq!(stats([1.0, 3.0].into_iter()), Some((1.0, 3.0, 2.0)));
    }
}
