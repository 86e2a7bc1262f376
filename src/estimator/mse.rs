use crate::estimator::HumanScoreSummary;
use crate::stats::{mean_squared_error, weighted_sum_sq_dev_pairs};

/// MSE of the system scores against the true score.
///
/// `(sum(c * (h_hat - m)^2) - n * error_variance) / n_scores`
pub fn mse_true(summary: &HumanScoreSummary, system: &[f64], error_variance: f64) -> f64 {
    let n = summary.counts.n_total as f64;
    let c = summary.counts.n_scores as f64;
    let se = weighted_sum_sq_dev_pairs(&summary.mean_scores, system, &summary.weights);
    (se - n * error_variance) / c
}

/// Closed form for fully double-scored sets: `MSE(H_hat, m) - error_variance / 2`.
pub fn mse_true_double_scored(
    summary: &HumanScoreSummary,
    system: &[f64],
    error_variance: f64,
) -> f64 {
    mean_squared_error(&summary.mean_scores, system) - error_variance / 2.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/estimator/mse.rs"]
mod tests;
