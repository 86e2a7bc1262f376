//! Turns raw textual score cells into a [`ResponseSet`].

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::PrmseError;
use crate::model::options::FilterOptions;
use crate::model::response::{ResponseRecord, ResponseSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScoreRow {
    pub id: String,
    pub system: String,
    pub human_1: String,
    pub human_2: Option<String>,
}

impl RawScoreRow {
    pub fn new(id: &str, system: &str, human_1: &str, human_2: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            system: system.to_string(),
            human_1: human_1.to_string(),
            human_2: human_2.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    NonNumericHumanScore,
    ZeroHumanScore,
    NonNumericSystemScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedResponse {
    pub id: String,
    pub reason: ExclusionReason,
}

#[derive(Debug, Clone)]
pub struct FilteredResponses {
    /// Ids of the kept rows, aligned with `responses`.
    pub ids: Vec<String>,
    pub responses: ResponseSet,
    pub excluded: Vec<ExcludedResponse>,
}

pub fn filter_responses(
    rows: &[RawScoreRow],
    options: &FilterOptions,
) -> Result<FilteredResponses, PrmseError> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.id.as_str()) {
            return Err(PrmseError::DuplicateResponseId(row.id.clone()));
        }
    }

    let mut ids = Vec::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());
    let mut excluded = Vec::new();
    let mut demoted = 0usize;

    for row in rows {
        let human_score_1 = match parse_score(&row.human_1) {
            None => {
                excluded.push(exclude(row, ExclusionReason::NonNumericHumanScore));
                continue;
            }
            Some(v) if v == 0.0 && options.exclude_zero_scores => {
                excluded.push(exclude(row, ExclusionReason::ZeroHumanScore));
                continue;
            }
            Some(v) => v,
        };
        let Some(system_score) = parse_score(&row.system) else {
            excluded.push(exclude(row, ExclusionReason::NonNumericSystemScore));
            continue;
        };
        let human_score_2 = row
            .human_2
            .as_deref()
            .and_then(parse_score)
            .filter(|&v| !(v == 0.0 && options.exclude_zero_scores));
        if row.human_2.is_some() && human_score_2.is_none() {
            demoted += 1;
        }

        ids.push(row.id.clone());
        records.push(ResponseRecord {
            system_score,
            human_score_1,
            human_score_2,
        });
    }

    if records.is_empty() {
        return Err(PrmseError::NoResponsesRemaining);
    }
    if demoted > 0 {
        warn!(
            demoted,
            "second human scores that were non-numeric or zero are treated as missing"
        );
    }
    info!(
        kept = records.len(),
        excluded = excluded.len(),
        exclude_zero_scores = options.exclude_zero_scores,
        "filtered responses"
    );

    Ok(FilteredResponses {
        ids,
        responses: ResponseSet::new(records)?,
        excluded,
    })
}

/// Parses a finite number, ignoring surrounding whitespace.
pub fn parse_score(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn exclude(row: &RawScoreRow, reason: ExclusionReason) -> ExcludedResponse {
    ExcludedResponse {
        id: row.id.clone(),
        reason,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/filter.rs"]
mod tests;
