use crate::error::{InsufficientData, PrmseError};
use crate::model::response::ResponseSet;

/// Measurement error variance from the double-scored subset:
/// `sum((h1 - h2)^2) / (2 * n_double)`.
pub fn variance_of_errors(responses: &ResponseSet) -> Result<f64, PrmseError> {
    variance_of_errors_from_pairs(responses.double_scored())
}

/// Same estimate over bare `(h1, h2)` pairs of double-scored responses.
pub fn variance_of_errors_from_pairs(
    pairs: impl IntoIterator<Item = (f64, f64)>,
) -> Result<f64, PrmseError> {
    let mut n_double = 0usize;
    let mut sum_sq = 0.0;
    for (h1, h2) in pairs {
        let d = h1 - h2;
        sum_sq += d * d;
        n_double += 1;
    }
    if n_double == 0 {
        return Err(InsufficientData::NoDoubleScored.into());
    }
    Ok(sum_sq / (2.0 * n_double as f64))
}

#[cfg(test)]
#[path = "../../tests/src_inline/estimator/measurement_error.rs"]
mod tests;
