//! The humanizer orchestrator.
//!
//! A [`Humanizer`] owns a random source, a configuration and the history of
//! its own calls. Each call to [`Humanizer::humanize`]:
//!
//! 1. Returns empty input unchanged without recording anything
//! 2. Resolves the style label to a profile (unknown labels use the fallback)
//! 3. Computes how many operations to apply from the profile and intensity
//! 4. Draws that many distinct operations in random order
//! 5. Applies them one after another and records the outcome

pub mod intensity;
pub mod selection;

pub use intensity::Intensity;
pub use selection::{modification_count, select_operations, SelectionPolicy, MIN_OPERATIONS};

use crate::config::HumanizerConfig;
use crate::error::HumanizeError;
use crate::history::{TransformationHistory, TransformationRecord};
use crate::style::Style;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Applies randomized rewrite operations and records each call.
///
/// The random source is a type parameter so tests and reproducible tools can
/// inject a seeded generator. The default uses [`StdRng`] seeded from OS
/// entropy.
///
/// # Example
///
/// ```
/// use text_humanizer::{Humanizer, Intensity, Style};
///
/// let mut humanizer = Humanizer::new();
/// let output = humanizer.humanize_with_style(
///     "AI improves efficiency. However, it has risks.",
///     Style::Professional,
///     Intensity::default(),
/// );
///
/// assert!(!output.is_empty());
/// assert_eq!(humanizer.history().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Humanizer<R = StdRng> {
    config: HumanizerConfig,
    history: TransformationHistory,
    rng: R,
}

impl Humanizer<StdRng> {
    /// Creates a humanizer with default configuration and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a humanizer with the given configuration and an entropy-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns `HumanizeError::InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: HumanizerConfig) -> Result<Self, HumanizeError> {
        Self::with_config_and_rng(config, StdRng::from_entropy())
    }

    /// Creates a humanizer whose random choices are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Humanizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Humanizer<R> {
    /// Creates a humanizer with default configuration and the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: HumanizerConfig::default(),
            history: TransformationHistory::new(),
            rng,
        }
    }

    /// Creates a humanizer with the given configuration and random source.
    ///
    /// # Errors
    ///
    /// Returns `HumanizeError::InvalidConfig` if the configuration fails validation.
    pub fn with_config_and_rng(config: HumanizerConfig, rng: R) -> Result<Self, HumanizeError> {
        config.validate().map_err(HumanizeError::InvalidConfig)?;
        Ok(Self::from_validated(config, rng))
    }

    /// Creates a humanizer from a configuration the caller already validated.
    pub(crate) fn from_validated(config: HumanizerConfig, rng: R) -> Self {
        Self {
            config,
            history: TransformationHistory::new(),
            rng,
        }
    }

    /// Humanizes `text` using the given style label and intensity.
    ///
    /// Empty input is returned unchanged and leaves the history untouched.
    /// An unknown style label falls back to the configured neutral profile.
    pub fn humanize(&mut self, text: &str, style: &str, intensity: Intensity) -> String {
        if text.is_empty() {
            return String::new();
        }

        let resolved = self.config.styles.resolve(style);
        if !resolved.known {
            log::warn!("Unknown style '{}', using fallback profile", style);
        }

        let count = modification_count(
            self.config.selection_policy,
            resolved.profile,
            intensity,
            &mut self.rng,
        );
        let operations = select_operations(count, &mut self.rng);

        log::debug!(
            "Applying {} operations (style={}, intensity={}): {:?}",
            operations.len(),
            style,
            intensity,
            operations.iter().map(|op| op.name()).collect::<Vec<_>>()
        );

        let mut humanized = text.to_string();
        for operation in &operations {
            humanized = operation.apply(&humanized, &self.config.probabilities, &mut self.rng);
        }

        self.history.push(TransformationRecord::new(
            text,
            &humanized,
            style,
            intensity.get(),
            operations,
        ));

        humanized
    }

    /// Humanizes `text` using one of the built-in styles.
    pub fn humanize_with_style(&mut self, text: &str, style: Style, intensity: Intensity) -> String {
        self.humanize(text, style.as_str(), intensity)
    }

    /// The transformations performed so far, oldest first.
    pub fn history(&self) -> &TransformationHistory {
        &self.history
    }

    /// Consumes the humanizer and returns its history.
    pub fn into_history(self) -> TransformationHistory {
        self.history
    }

    /// The active configuration.
    pub fn config(&self) -> &HumanizerConfig {
        &self.config
    }
}
