//! Evenly spaced sample grids.

/// `n` evenly spaced points starting at `start`.
///
/// With `endpoint = true` the last point is `stop`; otherwise the interval is
/// half-open and the spacing is `(stop - start) / n`.
pub fn linspace(start: f64, stop: f64, n: usize, endpoint: bool) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let div = (if endpoint { n - 1 } else { n }) as f64;
            let step = (stop - start) / div;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
