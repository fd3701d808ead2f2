//! Statistical helpers shared by the clustering and classification stages.

/// Minimum threshold for standard deviation to avoid division by zero.
/// Columns below this threshold are treated as zero variance.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Arithmetic mean of the finite values in a slice.
///
/// Returns `f64::NAN` for an empty slice or a slice with no finite values.
pub fn mean(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.iter().sum::<f64>() / finite.len() as f64
}

/// Population standard deviation (N denominator) of the finite values.
///
/// Uses the population form deliberately: the clustering stage scales the
/// full set of surviving industries, not a sample drawn from it.
pub fn population_std(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    let m = finite.iter().sum::<f64>() / finite.len() as f64;
    let variance = finite.iter().map(|x| (x - m).powi(2)).sum::<f64>() / finite.len() as f64;
    variance.sqrt()
}

/// Quantile of the finite values with linear interpolation between order
/// statistics.
///
/// `q` is clamped to `[0, 1]`. The interpolated position is `q * (n - 1)`,
/// so `quantile(&[1.0, 2.0], 0.5)` is `1.5`. Returns `None` when no finite
/// value is present.
///
/// # Examples
///
/// ```
/// use kolar_traits::stats::quantile;
///
/// let values = vec![10.0, 20.0, 30.0, 40.0];
/// assert_eq!(quantile(&values, 0.0), Some(10.0));
/// assert_eq!(quantile(&values, 1.0), Some(40.0));
/// assert_eq!(quantile(&values, 0.5), Some(25.0));
/// ```
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    finite.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let q = q.clamp(0.0, 1.0);
    let pos = q * (finite.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return Some(finite[lower]);
    }
    let frac = pos - lower as f64;
    Some(finite[lower] + frac * (finite[upper] - finite[lower]))
}
