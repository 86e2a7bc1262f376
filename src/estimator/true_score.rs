use crate::estimator::HumanScoreSummary;
use crate::stats::{is_constant, variance, weighted_mean, weighted_sum_sq_dev};

/// True score variance for any mix of single and double scoring.
///
/// The mean human score of each response is weighted by its number of
/// scores, and the denominator corrects for that weighting. Assumes at least
/// two responses.
pub fn true_score_variance(summary: &HumanScoreSummary, error_variance: f64) -> f64 {
    let counts = summary.counts;
    let n = counts.n_total as f64;
    let n_double = counts.n_double as f64;
    let c = counts.n_scores as f64;

    // A constant column has no spread; the weighted mean can still round away
    // from the shared value and leave a tiny positive sum.
    let ss = if is_constant(&summary.mean_scores) {
        0.0
    } else {
        let grand_mean = weighted_mean(&summary.mean_scores, &summary.weights);
        weighted_sum_sq_dev(&summary.mean_scores, &summary.weights, grand_mean)
    };

    let numerator = ss - (n - 1.0) * error_variance;
    let denominator = (n - 1.0) + n_double * (c - 2.0) / c;
    numerator / denominator
}

/// Closed form for fully double-scored sets: `Var(H_hat) - error_variance / 2`
/// with an `n - 1` denominator.
pub fn true_score_variance_double_scored(summary: &HumanScoreSummary, error_variance: f64) -> f64 {
    variance(&summary.mean_scores, 1) - error_variance / 2.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/estimator/true_score.rs"]
mod tests;
