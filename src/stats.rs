//! Small f64 accumulation helpers shared by the estimator stages.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of `values` with per-value weights. NaN when the weights sum to zero.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;
    for (&v, &w) in values.iter().zip(weights) {
        num += w * v;
        den += w;
    }
    if den == 0.0 {
        return f64::NAN;
    }
    num / den
}

/// Sum of squared deviations from `center`, each term scaled by its weight.
pub fn weighted_sum_sq_dev(values: &[f64], weights: &[f64], center: f64) -> f64 {
    let mut acc = 0.0;
    for (&v, &w) in values.iter().zip(weights) {
        let d = v - center;
        acc += w * d * d;
    }
    acc
}

/// `sum(w * (a - b)^2)` over aligned slices.
pub fn weighted_sum_sq_dev_pairs(a: &[f64], b: &[f64], weights: &[f64]) -> f64 {
    let mut acc = 0.0;
    for ((&x, &y), &w) in a.iter().zip(b).zip(weights) {
        let d = x - y;
        acc += w * d * d;
    }
    acc
}

/// True when every value equals the first. Empty input counts as constant.
pub fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((&first, rest)) => rest.iter().all(|&v| v == first),
        None => true,
    }
}

/// Variance with `n - ddof` in the denominator. Exactly zero for constant
/// input, where rounding in the mean would otherwise leave a residue.
pub fn variance(values: &[f64], ddof: usize) -> f64 {
    let n = values.len();
    if n <= ddof {
        return f64::NAN;
    }
    if is_constant(values) {
        return 0.0;
    }
    let m = mean(values);
    let mut acc = 0.0;
    for &v in values {
        let d = v - m;
        acc += d * d;
    }
    acc / (n - ddof) as f64
}

/// Mean squared difference between two equally long slices.
pub fn mean_squared_error(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        let d = x - y;
        acc += d * d;
    }
    acc / a.len() as f64
}

#[cfg(test)]
#[path = "../tests/src_inline/stats.rs"]
mod tests;
