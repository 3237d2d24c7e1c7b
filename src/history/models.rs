//! Data models for the transformation history.

use crate::rewrite::RewriteOperation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One logged outcome of a single `humanize` call.
///
/// Records are created once by the humanizer and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationRecord {
    /// Unique identifier for this record.
    ///
    /// Generated using UUID v4.
    pub id: String,

    /// When the transformation ran, in UTC.
    pub timestamp: DateTime<Utc>,

    /// Length of the input text in characters.
    pub original_length: usize,

    /// Length of the output text in characters.
    pub humanized_length: usize,

    /// Style label exactly as the caller passed it.
    pub style: String,

    /// Intensity used for the call.
    pub intensity: u8,

    /// Operations applied, in application order.
    pub operations: Vec<RewriteOperation>,
}

impl TransformationRecord {
    /// Creates a record for a completed transformation.
    ///
    /// Lengths are counted in Unicode scalar values, not bytes.
    pub fn new(
        original: &str,
        humanized: &str,
        style: impl Into<String>,
        intensity: u8,
        operations: Vec<RewriteOperation>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            original_length: original.chars().count(),
            humanized_length: humanized.chars().count(),
            style: style.into(),
            intensity,
            operations,
        }
    }

    /// Difference between output and input length in characters.
    pub fn length_delta(&self) -> i64 {
        self.humanized_length as i64 - self.original_length as i64
    }

    /// Checks whether a given operation was applied.
    pub fn applied(&self, operation: RewriteOperation) -> bool {
        self.operations.contains(&operation)
    }

    /// Stable names of the applied operations, in order.
    pub fn operation_names(&self) -> Vec<&'static str> {
        self.operations.iter().map(|op| op.name()).collect()
    }
}

/// Ordered, append-only log of transformation records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformationHistory {
    records: Vec<TransformationRecord>,
}

impl TransformationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Only the humanizer writes to its history.
    pub(crate) fn push(&mut self, record: TransformationRecord) {
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[TransformationRecord] {
        &self.records
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TransformationRecord> {
        self.records.iter()
    }

    /// Number of recorded transformations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transformation has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&TransformationRecord> {
        self.records.last()
    }

    /// Consumes the history and returns its records.
    pub fn into_records(self) -> Vec<TransformationRecord> {
        self.records
    }

    /// Serializes the history as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Serializes the history as JSON Lines, one record per line.
    pub fn to_jsonl(&self) -> Result<String, HistoryError> {
        let mut output = String::new();
        for record in &self.records {
            output.push_str(&serde_json::to_string(record)?);
            output.push('\n');
        }
        Ok(output)
    }
}

impl<'a> IntoIterator for &'a TransformationHistory {
    type Item = &'a TransformationRecord;
    type IntoIter = std::slice::Iter<'a, TransformationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<TransformationRecord>> for TransformationHistory {
    fn from(records: Vec<TransformationRecord>) -> Self {
        Self { records }
    }
}

/// Errors that can occur while exporting or loading history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// File I/O failed.
    #[error("History storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A record could not be serialized or deserialized.
    #[error("History serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
