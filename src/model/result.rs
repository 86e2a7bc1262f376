use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrmseResult {
    pub measurement_error_variance: f64,
    pub true_score_variance: f64,
    pub mse_true: f64,
    /// Not clamped; negative values and values above 1 are valid estimates.
    pub prmse_true: f64,
}

/// One row of a multi-system true-score evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemEvaluation {
    pub system: String,
    pub n: usize,
    pub n_raters: usize,
    pub n_single: usize,
    pub n_double: usize,
    pub measurement_error_variance: f64,
    pub true_score_variance: f64,
    pub mse_true: f64,
    pub prmse_true: f64,
}

impl SystemEvaluation {
    pub fn result(&self) -> PrmseResult {
        PrmseResult {
            measurement_error_variance: self.measurement_error_variance,
            true_score_variance: self.true_score_variance,
            mse_true: self.mse_true,
            prmse_true: self.prmse_true,
        }
    }
}
