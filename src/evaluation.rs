//! True-score evaluation of several systems against one set of human scores.

use tracing::{debug, info};

use crate::error::PrmseError;
use crate::estimator::{
    HumanScoreSummary, check_min_responses, mse_true, prmse_true, resolve_error_variance,
    true_score_variance,
};
use crate::model::options::EstimatorOptions;
use crate::model::response::{ResponseSet, check_human_columns};
use crate::model::result::SystemEvaluation;

/// Evaluates every `(name, scores)` system column against the shared human
/// scores. Rows come back in input order.
///
/// Measurement error and true score variance depend only on the human scores,
/// so they are estimated once and shared by all rows. The human columns are
/// validated even when `systems` is empty.
pub fn evaluate_systems(
    human_1: &[f64],
    human_2: &[Option<f64>],
    systems: &[(&str, &[f64])],
    options: &EstimatorOptions,
) -> Result<Vec<SystemEvaluation>, PrmseError> {
    check_human_columns(human_1, human_2)?;
    check_min_responses(human_1.len())?;
    let double_scored = human_1
        .iter()
        .zip(human_2)
        .filter_map(|(&h1, &h2)| h2.map(|h2| (h1, h2)));
    let sigma_e_sq = resolve_error_variance(double_scored, options)?;

    let sets = systems
        .iter()
        .map(|(_, scores)| ResponseSet::from_columns(scores, human_1, human_2))
        .collect::<Result<Vec<_>, _>>()?;
    let Some(first) = sets.first() else {
        return Ok(Vec::new());
    };

    let summary = HumanScoreSummary::from_responses(first);
    let tsv = true_score_variance(&summary, sigma_e_sq);
    let counts = summary.counts;
    let n_raters = if counts.n_double > 0 { 2 } else { 1 };

    info!(
        n_systems = systems.len(),
        n = counts.n_total,
        n_double = counts.n_double,
        "running true score evaluations"
    );

    let mut rows = Vec::with_capacity(systems.len());
    for ((name, _), set) in systems.iter().zip(&sets) {
        let system = set.system_scores();
        let mse = mse_true(&summary, &system, sigma_e_sq);
        let prmse = prmse_true(mse, tsv, options.zero_variance)?;
        debug!(system = *name, mse_true = mse, prmse_true = prmse, "evaluated system");
        rows.push(SystemEvaluation {
            system: name.to_string(),
            n: counts.n_total,
            n_raters,
            n_single: counts.n_single,
            n_double: counts.n_double,
            measurement_error_variance: sigma_e_sq,
            true_score_variance: tsv,
            mse_true: mse,
            prmse_true: prmse,
        });
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "../tests/src_inline/evaluation.rs"]
mod tests;
