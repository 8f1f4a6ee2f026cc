//! Small summary-statistics helpers for run-length samples.

/// Wilson score interval `(lower, upper)` for `hits` out of `trials`, in count form:
///
/// \(\frac{k + z^2/2}{n + z^2} \pm \frac{z}{n + z^2}\sqrt{\frac{k(n-k)}{n} + \frac{z^2}{4}}\)
///
/// Zero trials yields `(0, 1)`. A non-positive or non-finite `z` falls back to 1.96.
pub fn wilson_interval(hits: usize, trials: usize, z: f64) -> (f64, f64) {
    if trials == 0 {
        return (0.0, 1.0);
    }
    let z = if z.is_finite() && z > 0.0 { z } else { 1.96 };
    let n = trials as f64;
    let k = hits.min(trials) as f64;
    let z2 = z * z;
    let center = (k + z2 / 2.0) / (n + z2);
    let margin = z / (n + z2) * (k * (n - k) / n + z2 / 4.0).sqrt();
    (
        (center - margin).clamp(0.0, 1.0),
        (center + margin).clamp(0.0, 1.0),
    )
}

/// Mean and sample standard deviation (`n - 1` denominator).
///
/// The deviation is 0 for fewer than two values; an empty slice gives `None`.
pub fn mean_sd(xs: &[usize]) -> Option<(f64, f64)> {
    if xs.is_empty() {
        return None;
    }
    let n = xs.len() as f64;
    let mean = xs.iter().map(|&x| x as f64).sum::<f64>() / n;
    if xs.len() < 2 {
        return Some((mean, 0.0));
    }
    let var = xs
        .iter()
        .map(|&x| {
            let d = x as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / (n - 1.0);
    Some((mean, var.sqrt()))
}
