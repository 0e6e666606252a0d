//! Fixed-size character plots for the terminal.
//!
//! Output depends only on the input values and the requested size, so the
//! plots can be compared verbatim in tests.
//!
//! Plot kinds:
//! - heatmap of `g(phi1, phi2)`: phi1 left→right, phi2 bottom→top, shade ramp
//!   from `' '` (minimum) to `'@'` (maximum)
//! - radial profile: a `-` line over `r`

use ndarray::Array2;

/// Shades from lowest to highest value.
const RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Render a heatmap of `values` (rows = phi2, columns = phi1).
///
/// The grid is resampled by nearest neighbour to `width × height` cells.
pub fn render_heatmap(
    values: &Array2<f64>,
    phi1_range: (f64, f64),
    phi2_range: (f64, f64),
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let (rows, cols) = values.dim();

    let mut out = String::new();
    let Some((v_min, v_max)) = value_range(values.iter().copied()) else {
        out.push_str("Map: no finite values\n");
        return out;
    };

    out.push_str(&format!(
        "Map: phi1=[{:.3}, {:.3}) | phi2=[{:.3}, {:.3}) | g=[{v_min:.3}, {v_max:.3}]\n",
        phi1_range.0, phi1_range.1, phi2_range.0, phi2_range.1
    ));

    for y in 0..height {
        // Row 0 is the top of the plot, i.e. the largest phi2.
        let i = sample_index(height - 1 - y, height, rows);
        let line: String = (0..width)
            .map(|x| shade(values[[i, sample_index(x, width, cols)]], v_min, v_max))
            .collect();
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!(
        "Scale: '{}' = {v_min:.3} .. '{}' = {v_max:.3}\n",
        RAMP[0],
        RAMP[RAMP.len() - 1]
    ));
    out
}

/// Render `(r, y)` samples as a line plot.
pub fn render_profile(points: &[(f64, f64)], label: &str, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (r_min, r_max) = value_range(points.iter().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = value_range(points.iter().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    draw_curve(&mut grid, points, r_min, r_max, y_min, y_max);

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: r=[{r_min:.4}, {r_max:.4}] | {label}=[{y_min:.3}, {y_max:.3}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    (min.is_finite() && max.is_finite()).then_some((min, max))
}

fn sample_index(cell: usize, cells: usize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let u = (cell as f64 + 0.5) / cells as f64;
    ((u * len as f64) as usize).min(len - 1)
}

fn shade(v: f64, min: f64, max: f64) -> char {
    if !v.is_finite() {
        return '?';
    }
    if max <= min {
        return RAMP[RAMP.len() / 2];
    }
    let u = ((v - min) / (max - min)).clamp(0.0, 1.0);
    RAMP[(u * (RAMP.len() - 1) as f64).round() as usize]
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    if t_max <= t_min {
        return 0;
    }
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
