//! File export for transformation history.
//!
//! Records are written in JSONL (JSON Lines) format so that appending a
//! session's history never rewrites earlier lines, and a damaged line only
//! loses that one record.

use super::models::{HistoryError, TransformationHistory, TransformationRecord};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Appends every record of `history` to a JSONL file.
///
/// The file and its parent directories are created if they don't exist.
///
/// # Returns
///
/// The number of records written.
///
/// # Errors
///
/// Returns `HistoryError` if the file cannot be opened or written, or if a
/// record cannot be serialized.
pub fn append_jsonl(
    history: &TransformationHistory,
    path: impl AsRef<Path>,
) -> Result<usize, HistoryError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    for record in history {
        let json = serde_json::to_string(record)?;
        writeln!(file, "{}", json)?;
    }

    file.flush()?;

    log::debug!(
        "Appended {} transformation records to {}",
        history.len(),
        path.display()
    );

    Ok(history.len())
}

impl TransformationHistory {
    /// Appends this history to a JSONL file. See [`append_jsonl`].
    pub fn write_jsonl(&self, path: impl AsRef<Path>) -> Result<usize, HistoryError> {
        append_jsonl(self, path)
    }
}

/// Loads records from a JSONL file.
///
/// Blank lines are ignored. Lines that cannot be parsed are skipped with a
/// warning instead of failing the whole load. A missing file yields an empty
/// history.
///
/// # Errors
///
/// Returns `HistoryError::Storage` if the file exists but cannot be read.
pub fn load_jsonl(path: impl AsRef<Path>) -> Result<TransformationHistory, HistoryError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(TransformationHistory::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    let mut corrupted_lines = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<TransformationRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                corrupted_lines += 1;
                log::warn!(
                    "Skipping corrupted history record at line {}: {}",
                    line_num + 1,
                    e
                );
            }
        }
    }

    if corrupted_lines > 0 && corrupted_lines > records.len() {
        log::warn!(
            "History file {} has significant corruption ({} corrupted lines, {} valid records)",
            path.display(),
            corrupted_lines,
            records.len()
        );
    }

    Ok(TransformationHistory::from(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::RewriteOperation;
    use tempfile::TempDir;

    fn sample_history(count: usize) -> TransformationHistory {
        (0..count)
            .map(|i| {
                TransformationRecord::new(
                    "Some input.",
                    "Indeed, some input.",
                    "Casual",
                    (i % 10 + 1) as u8,
                    vec![RewriteOperation::SentenceStructure],
                )
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_append_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.jsonl");

        let history = sample_history(3);
        assert_eq!(append_jsonl(&history, &path).unwrap(), 3);

        let loaded = load_jsonl(&path).unwrap();
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_append_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.jsonl");

        append_jsonl(&sample_history(2), &path).unwrap();
        append_jsonl(&sample_history(1), &path).unwrap();

        assert_eq!(load_jsonl(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("history.jsonl");

        assert_eq!(sample_history(1).write_jsonl(&path).unwrap(), 1);
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = load_jsonl(temp_dir.path().join("absent.jsonl")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_skips_corrupted_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.jsonl");

        let history = sample_history(2);
        let mut content = history.to_jsonl().unwrap();
        content.push_str("{not valid json\n\n");
        fs::write(&path, content).unwrap();

        let loaded = load_jsonl(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
