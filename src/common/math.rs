//! Trailing-window statistics over plain `f64` slices.
//!
//! Every function returns a vector aligned with its input, with `None`
//! until enough observations exist. A window wider than the input is
//! not an error; the result is simply all `None`.

/// Arithmetic mean of the trailing `window` values
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, mean)
}

/// Population standard deviation (ddof = 0) of the trailing `window` values
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, population_std)
}

/// Exponentially weighted mean with `alpha = 1 / period` and no bias
/// adjustment (Wilder smoothing). Seeded with the first value and
/// reported once `period` observations have been folded in.
pub fn wilder_ewm(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    let alpha = 1.0 / period as f64;
    let mut out = Vec::with_capacity(values.len());
    let mut state: Option<f64> = None;

    for (i, &x) in values.iter().enumerate() {
        let next = match state {
            None => x,
            Some(prev) => (1.0 - alpha) * prev + alpha * x,
        };
        state = Some(next);
        out.push(if i + 1 >= period { Some(next) } else { None });
    }

    out
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn rolling<F>(values: &[f64], window: usize, stat: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                Some(stat(&values[i + 1 - window..=i]))
            }
        })
        .collect()
}
