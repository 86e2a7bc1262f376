//! True-score PRMSE estimation for automated scoring evaluation.
//!
//! Human ratings carry measurement error, so agreement between system and
//! human scores understates how well the system tracks the underlying true
//! score. The estimators here use a double-scored subset of responses to
//! measure rater error and correct for it.

pub mod error;
pub mod estimator;
pub mod evaluation;
pub mod filter;
pub mod logging;
pub mod model;
pub mod stats;

pub use error::{InsufficientData, PrmseError};
pub use estimator::{compute_prmse, compute_prmse_with_error_variance, compute_prmse_with_options};
pub use evaluation::evaluate_systems;
pub use filter::{FilteredResponses, RawScoreRow, filter_responses};
pub use logging::init_tracing;
pub use model::options::{EstimatorOptions, FilterOptions, ZeroVariancePolicy};
pub use model::response::{ResponseRecord, ResponseSet, ScoringCounts};
pub use model::result::{PrmseResult, SystemEvaluation};
