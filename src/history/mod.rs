//! Transformation history tracking and export.
//!
//! Every non-empty `humanize` call appends one [`TransformationRecord`] to the
//! history owned by its humanizer. The history is append-only for the life of
//! the session and can be exported for display or download.
//!
//! # Features
//!
//! - Ordered, append-only record log
//! - JSON and JSONL export
//! - Appending to and loading from JSONL files
//! - Summary statistics for an analytics view
//!
//! # Example
//!
//! ```
//! use text_humanizer::{Humanizer, Intensity};
//!
//! let mut humanizer = Humanizer::new();
//! humanizer.humanize("Moreover, it works.", "Professional", Intensity::default());
//!
//! let history = humanizer.history();
//! assert_eq!(history.len(), 1);
//! let json = history.to_json().unwrap();
//! assert!(json.contains("originalLength"));
//! ```

pub mod models;
pub mod stats;
pub mod storage;

pub use models::{HistoryError, TransformationHistory, TransformationRecord};
pub use stats::{format_stats, HistoryStats};
pub use storage::{append_jsonl, load_jsonl};
