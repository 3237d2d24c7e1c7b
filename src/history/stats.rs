//! Summary statistics over transformation records.
//!
//! These aggregates back an analytics view: how often each operation ran,
//! which intensities were used and how much the text grew.

use super::models::{TransformationHistory, TransformationRecord};
use crate::rewrite::RewriteOperation;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated view of a set of transformation records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    /// Number of records aggregated.
    pub total: usize,

    /// How many times each operation was applied, keyed by stable name.
    ///
    /// Every operation is present, with zero if it never ran.
    pub operation_counts: BTreeMap<String, usize>,

    /// Number of calls per intensity value.
    pub intensity_distribution: BTreeMap<u8, usize>,

    /// Number of calls per style label.
    pub style_counts: BTreeMap<String, usize>,

    /// Mean of `humanized_length - original_length`, or 0 with no records.
    pub average_length_delta: f64,
}

impl HistoryStats {
    /// Builds statistics from records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TransformationRecord>,
    {
        let mut stats = HistoryStats {
            operation_counts: RewriteOperation::ALL
                .iter()
                .map(|op| (op.name().to_string(), 0))
                .collect(),
            ..Default::default()
        };
        let mut delta_sum: i64 = 0;

        for record in records {
            stats.total += 1;
            delta_sum += record.length_delta();

            for op in &record.operations {
                *stats.operation_counts.entry(op.name().to_string()).or_insert(0) += 1;
            }
            *stats
                .intensity_distribution
                .entry(record.intensity)
                .or_insert(0) += 1;
            *stats.style_counts.entry(record.style.clone()).or_insert(0) += 1;
        }

        if stats.total > 0 {
            stats.average_length_delta = delta_sum as f64 / stats.total as f64;
        }

        stats
    }

    /// Total number of operations applied across all records.
    pub fn total_operations(&self) -> usize {
        self.operation_counts.values().sum()
    }

    /// The most frequently applied operation, if any ran.
    ///
    /// Ties resolve to the name that sorts first.
    pub fn most_used_operation(&self) -> Option<&str> {
        self.operation_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, _)| name.as_str())
    }
}

impl TransformationHistory {
    /// Aggregates statistics over every record in this history.
    pub fn stats(&self) -> HistoryStats {
        HistoryStats::from_records(self)
    }
}

/// Formats statistics as a one-line summary.
///
/// # Example
///
/// ```
/// use text_humanizer::history::{format_stats, HistoryStats, TransformationHistory};
///
/// let stats = HistoryStats::from_records(&TransformationHistory::new());
/// assert_eq!(format_stats(&stats), "Calls: 0 | Operations: 0 | Avg length change: +0.0");
/// ```
pub fn format_stats(stats: &HistoryStats) -> String {
    let mut summary = format!(
        "Calls: {} | Operations: {} | Avg length change: {:+.1}",
        stats.total,
        stats.total_operations(),
        stats.average_length_delta
    );

    if let Some(name) = stats.most_used_operation() {
        summary.push_str(&format!(" | Most used: {}", name));
    }

    summary
}
