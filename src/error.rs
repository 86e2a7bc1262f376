use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsufficientData {
    #[error("no double-scored responses, measurement error variance cannot be estimated")]
    NoDoubleScored,

    #[error("at least 2 responses are required, got {n}")]
    TooFewResponses { n: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    System,
    Human1,
    Human2,
}

impl std::fmt::Display for ScoreField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScoreField::System => "system_score",
            ScoreField::Human1 => "human_score_1",
            ScoreField::Human2 => "human_score_2",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrmseError {
    #[error("insufficient data: {0}")]
    InsufficientData(#[from] InsufficientData),

    #[error("true score variance is zero, PRMSE is undefined")]
    UndefinedResult,

    #[error("invalid {field} at record {index}: {value}")]
    InvalidScore {
        index: usize,
        field: ScoreField,
        value: f64,
    },

    #[error("column length mismatch: expected {expected}, found {found}")]
    ColumnLengthMismatch { expected: usize, found: usize },

    #[error("invalid measurement error variance: {0}")]
    InvalidErrorVariance(f64),

    #[error("duplicate response id: {0}")]
    DuplicateResponseId(String),

    #[error("no responses remaining after filtering out non-numeric and zero human scores")]
    NoResponsesRemaining,
}
