use serde::Deserialize;

/// What to report when the estimated true score variance is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroVariancePolicy {
    #[default]
    Error,
    Nan,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EstimatorOptions {
    pub zero_variance: ZeroVariancePolicy,
    /// Measurement error variance estimated elsewhere, e.g. on a larger
    /// double-scored sample. When set, double-scored responses are not
    /// required.
    pub error_variance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub exclude_zero_scores: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            exclude_zero_scores: true,
        }
    }
}
