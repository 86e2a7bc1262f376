//! True-score PRMSE estimation.
//!
//! Measurement error variance comes from the double-scored responses only.
//! True score variance and the MSE against the true score are then corrected
//! for that error, with single-scored responses weighted once and
//! double-scored responses weighted twice.

pub mod measurement_error;
pub mod mse;
pub mod true_score;

use tracing::{debug, warn};

use crate::error::{InsufficientData, PrmseError};
use crate::model::options::{EstimatorOptions, ZeroVariancePolicy};
use crate::model::response::{ResponseSet, ScoringCounts};
use crate::model::result::PrmseResult;

pub use measurement_error::{variance_of_errors, variance_of_errors_from_pairs};
pub use mse::{mse_true, mse_true_double_scored};
pub use true_score::{true_score_variance, true_score_variance_double_scored};

/// Per-response mean human score (`H_hat`) with its score-count weight (`c`).
#[derive(Debug, Clone)]
pub struct HumanScoreSummary {
    pub mean_scores: Vec<f64>,
    pub weights: Vec<f64>,
    pub counts: ScoringCounts,
}

impl HumanScoreSummary {
    pub fn from_responses(responses: &ResponseSet) -> Self {
        let n = responses.len();
        let mut mean_scores = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);
        for record in responses.records() {
            mean_scores.push(record.mean_human_score());
            weights.push(record.n_scores() as f64);
        }
        Self {
            mean_scores,
            weights,
            counts: responses.counts(),
        }
    }
}

pub fn compute_prmse(responses: &ResponseSet) -> Result<PrmseResult, PrmseError> {
    compute_prmse_with_options(responses, &EstimatorOptions::default())
}

/// Like [`compute_prmse`] but with a measurement error variance estimated
/// elsewhere, so single-scored-only sets are accepted.
pub fn compute_prmse_with_error_variance(
    responses: &ResponseSet,
    error_variance: f64,
) -> Result<PrmseResult, PrmseError> {
    let options = EstimatorOptions {
        error_variance: Some(error_variance),
        ..EstimatorOptions::default()
    };
    compute_prmse_with_options(responses, &options)
}

pub fn compute_prmse_with_options(
    responses: &ResponseSet,
    options: &EstimatorOptions,
) -> Result<PrmseResult, PrmseError> {
    check_min_responses(responses.len())?;
    let sigma_e_sq = resolve_error_variance(responses.double_scored(), options)?;
    let summary = HumanScoreSummary::from_responses(responses);
    let tsv = true_score_variance(&summary, sigma_e_sq);
    let system = responses.system_scores();
    let mse = mse_true(&summary, &system, sigma_e_sq);
    let prmse = prmse_true(mse, tsv, options.zero_variance)?;

    debug!(
        n = summary.counts.n_total,
        n_double = summary.counts.n_double,
        sigma_e_sq,
        true_score_variance = tsv,
        mse_true = mse,
        prmse_true = prmse,
        "computed true score PRMSE"
    );

    Ok(PrmseResult {
        measurement_error_variance: sigma_e_sq,
        true_score_variance: tsv,
        mse_true: mse,
        prmse_true: prmse,
    })
}

/// `1 - mse / true_score_variance`, guarded against a zero denominator.
pub fn prmse_true(
    mse: f64,
    true_score_variance: f64,
    policy: ZeroVariancePolicy,
) -> Result<f64, PrmseError> {
    if true_score_variance == 0.0 {
        return match policy {
            ZeroVariancePolicy::Error => Err(PrmseError::UndefinedResult),
            ZeroVariancePolicy::Nan => {
                warn!("true score variance is zero, reporting PRMSE as NaN");
                Ok(f64::NAN)
            }
        };
    }
    if true_score_variance < 0.0 {
        warn!(
            true_score_variance,
            "negative true score variance estimate, PRMSE is not interpretable"
        );
    }
    Ok(1.0 - mse / true_score_variance)
}

pub(crate) fn check_min_responses(n: usize) -> Result<(), PrmseError> {
    if n < 2 {
        return Err(InsufficientData::TooFewResponses { n }.into());
    }
    Ok(())
}

pub(crate) fn resolve_error_variance(
    double_scored: impl IntoIterator<Item = (f64, f64)>,
    options: &EstimatorOptions,
) -> Result<f64, PrmseError> {
    match options.error_variance {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(PrmseError::InvalidErrorVariance(v)),
        None => variance_of_errors_from_pairs(double_scored),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/estimator/mod.rs"]
mod tests;
