//! Text Humanizer
//!
//! Applies randomized rewriting rules to text so that mechanically produced
//! prose reads more conversationally, and keeps a log of every
//! transformation.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **text**: Sentence and token splitting
//! - **rewrite**: The five rewrite operations and their probabilities
//! - **style**: Style labels and their scaling profiles
//! - **humanizer**: The orchestrator that selects and applies operations
//! - **history**: Transformation records, export and statistics
//! - **session**: One humanizer per user session
//! - **config**: Loading and validating configuration
//!
//! # Pipeline
//!
//! [`Humanizer::humanize`] takes a text, a style label and an intensity:
//! 1. Empty text is returned unchanged and nothing is recorded
//! 2. The style resolves to a factor and base operation count
//! 3. The count is scaled by intensity and clamped to `[2, 5]`
//! 4. That many distinct operations are drawn in random order
//! 5. Each operation rewrites the previous operation's output
//! 6. A [`TransformationRecord`] is appended to the humanizer's history
//!
//! # Usage
//!
//! ```
//! use text_humanizer::{Humanizer, Intensity};
//!
//! let mut humanizer = Humanizer::seeded(42);
//! let output = humanizer.humanize(
//!     "AI improves efficiency. However, it has risks.",
//!     "Professional",
//!     Intensity::new(7).unwrap(),
//! );
//!
//! assert!(!output.is_empty());
//! let record = humanizer.history().last().unwrap();
//! assert!(record.operations.len() >= 2);
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod humanizer;
pub mod rewrite;
pub mod session;
pub mod style;
pub mod text;

pub use config::{load_config, load_config_file, ConfigError, HumanizerConfig};
pub use error::HumanizeError;
pub use history::{HistoryError, HistoryStats, TransformationHistory, TransformationRecord};
pub use humanizer::{Humanizer, Intensity, SelectionPolicy};
pub use rewrite::{RewriteOperation, RewriteProbabilities};
pub use session::SessionStore;
pub use style::{Style, StyleConfig, StyleProfile};
