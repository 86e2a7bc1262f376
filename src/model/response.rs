use serde::{Deserialize, Serialize};

use crate::error::{PrmseError, ScoreField};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub system_score: f64,
    pub human_score_1: f64,
    pub human_score_2: Option<f64>,
}

impl ResponseRecord {
    pub fn single(system_score: f64, human_score_1: f64) -> Self {
        Self {
            system_score,
            human_score_1,
            human_score_2: None,
        }
    }

    pub fn double(system_score: f64, human_score_1: f64, human_score_2: f64) -> Self {
        Self {
            system_score,
            human_score_1,
            human_score_2: Some(human_score_2),
        }
    }

    pub fn is_double_scored(&self) -> bool {
        self.human_score_2.is_some()
    }

    /// Number of human scores, 1 or 2.
    pub fn n_scores(&self) -> usize {
        if self.is_double_scored() { 2 } else { 1 }
    }

    /// Mean of the available human scores.
    pub fn mean_human_score(&self) -> f64 {
        match self.human_score_2 {
            Some(h2) => (self.human_score_1 + h2) / 2.0,
            None => self.human_score_1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoringCounts {
    pub n_total: usize,
    pub n_single: usize,
    pub n_double: usize,
    /// Total number of human scores, `n_single + 2 * n_double`.
    pub n_scores: usize,
}

/// Immutable, validated collection of scored responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResponseSet {
    records: Vec<ResponseRecord>,
}

impl ResponseSet {
    pub fn new(records: Vec<ResponseRecord>) -> Result<Self, PrmseError> {
        for (index, record) in records.iter().enumerate() {
            check_finite(index, ScoreField::System, record.system_score)?;
            check_finite(index, ScoreField::Human1, record.human_score_1)?;
            if let Some(h2) = record.human_score_2 {
                check_finite(index, ScoreField::Human2, h2)?;
            }
        }
        Ok(Self { records })
    }

    /// Builds a set from parallel columns. All three columns must have the
    /// same length.
    pub fn from_columns(
        system: &[f64],
        human_1: &[f64],
        human_2: &[Option<f64>],
    ) -> Result<Self, PrmseError> {
        check_len(human_1.len(), system.len())?;
        check_len(human_1.len(), human_2.len())?;
        let records = system
            .iter()
            .zip(human_1)
            .zip(human_2)
            .map(|((&system_score, &human_score_1), &human_score_2)| ResponseRecord {
                system_score,
                human_score_1,
                human_score_2,
            })
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[ResponseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn double_scored(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.records
            .iter()
            .filter_map(|r| r.human_score_2.map(|h2| (r.human_score_1, h2)))
    }

    pub fn counts(&self) -> ScoringCounts {
        let n_double = self.double_scored().count();
        let n_total = self.records.len();
        let n_single = n_total - n_double;
        ScoringCounts {
            n_total,
            n_single,
            n_double,
            n_scores: n_single + 2 * n_double,
        }
    }

    pub fn system_scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.system_score).collect()
    }
}

pub(crate) fn check_len(expected: usize, found: usize) -> Result<(), PrmseError> {
    if expected != found {
        return Err(PrmseError::ColumnLengthMismatch { expected, found });
    }
    Ok(())
}

/// Length and finiteness checks for a pair of human score columns.
pub(crate) fn check_human_columns(
    human_1: &[f64],
    human_2: &[Option<f64>],
) -> Result<(), PrmseError> {
    check_len(human_1.len(), human_2.len())?;
    for (index, (&h1, &h2)) in human_1.iter().zip(human_2).enumerate() {
        check_finite(index, ScoreField::Human1, h1)?;
        if let Some(h2) = h2 {
            check_finite(index, ScoreField::Human2, h2)?;
        }
    }
    Ok(())
}

fn check_finite(index: usize, field: ScoreField, value: f64) -> Result<(), PrmseError> {
    if !value.is_finite() {
        return Err(PrmseError::InvalidScore {
            index,
            field,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/response.rs"]
mod tests;
