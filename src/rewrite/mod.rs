//! Text rewrite operations.
//!
//! This module provides the five rewriting rules applied by the humanizer.
//! Every rule is a pure function taking the input text and a random source
//! and returning a new string; the input is never modified.
//!
//! # Operations
//!
//! - **Professional transitions**: swap stock connectives for softer phrases
//! - **Sentence structure**: prepend interjections to some sentences
//! - **Natural hesitation**: insert hesitation markers between words
//! - **Contextual nuance**: prepend qualifiers to some sentences
//! - **Punctuation refinement**: collapse `!!`/`??` runs and swap commas for dashes
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use text_humanizer::rewrite::{RewriteOperation, RewriteProbabilities};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let probabilities = RewriteProbabilities::default();
//! let output = RewriteOperation::PunctuationRefinement.apply("Wow!!!", &probabilities, &mut rng);
//! assert_eq!(output, "Wow!");
//! ```

pub mod hesitation;
pub mod nuance;
pub mod punctuation;
pub mod structure;
pub mod transitions;

pub use hesitation::{introduce_natural_hesitation, HESITATION_MARKERS};
pub use nuance::{add_contextual_nuance, QUALIFIERS};
pub use punctuation::{collapse_punctuation, refine_punctuation};
pub use structure::{vary_sentence_structure, INTERJECTIONS};
pub use transitions::{
    add_professional_transitions, ADDITIVE_REPLACEMENTS, CONTRASTIVE_REPLACEMENTS,
};

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single rewrite operation.
///
/// The stable name returned by [`RewriteOperation::name`] is what appears in
/// transformation records, exported history and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteOperation {
    /// Replace connective words with transition phrases.
    ProfessionalTransitions,
    /// Prepend interjections to sentences.
    SentenceStructure,
    /// Insert hesitation markers between tokens.
    NaturalHesitation,
    /// Prepend qualifier phrases to sentences.
    ContextualNuance,
    /// Collapse repeated marks and replace a first comma with a dash.
    PunctuationRefinement,
}

impl RewriteOperation {
    /// All operations in canonical order.
    pub const ALL: [RewriteOperation; 5] = [
        RewriteOperation::ProfessionalTransitions,
        RewriteOperation::SentenceStructure,
        RewriteOperation::NaturalHesitation,
        RewriteOperation::ContextualNuance,
        RewriteOperation::PunctuationRefinement,
    ];

    /// Total number of available operations.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the stable name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            RewriteOperation::ProfessionalTransitions => "professional_transitions",
            RewriteOperation::SentenceStructure => "sentence_structure",
            RewriteOperation::NaturalHesitation => "natural_hesitation",
            RewriteOperation::ContextualNuance => "contextual_nuance",
            RewriteOperation::PunctuationRefinement => "punctuation_refinement",
        }
    }

    /// Applies this operation to `text`.
    ///
    /// The probability used by sentence- and token-level operations is taken
    /// from `probabilities`; transition substitution has none and rewrites
    /// every match.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        text: &str,
        probabilities: &RewriteProbabilities,
        rng: &mut R,
    ) -> String {
        match self {
            RewriteOperation::ProfessionalTransitions => add_professional_transitions(text, rng),
            RewriteOperation::SentenceStructure => {
                vary_sentence_structure(text, probabilities.structure, rng)
            }
            RewriteOperation::NaturalHesitation => {
                introduce_natural_hesitation(text, probabilities.hesitation, rng)
            }
            RewriteOperation::ContextualNuance => {
                add_contextual_nuance(text, probabilities.nuance, rng)
            }
            RewriteOperation::PunctuationRefinement => {
                refine_punctuation(text, probabilities.punctuation, rng)
            }
        }
    }
}

impl fmt::Display for RewriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RewriteOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RewriteOperation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("Unknown rewrite operation: {}", s))
    }
}

/// Per-unit probabilities used by the randomized operations.
///
/// Each value is the chance that a single sentence (or token position, for
/// hesitation) is edited. All values must lie in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteProbabilities {
    /// Chance of prepending an interjection to a sentence.
    #[serde(default = "default_structure")]
    pub structure: f64,

    /// Chance of inserting a hesitation marker before a token.
    #[serde(default = "default_hesitation")]
    pub hesitation: f64,

    /// Chance of prepending a qualifier to a sentence.
    #[serde(default = "default_nuance")]
    pub nuance: f64,

    /// Chance of replacing a sentence's first comma with a dash.
    #[serde(default = "default_punctuation")]
    pub punctuation: f64,
}

impl Default for RewriteProbabilities {
    fn default() -> Self {
        Self {
            structure: default_structure(),
            hesitation: default_hesitation(),
            nuance: default_nuance(),
            punctuation: default_punctuation(),
        }
    }
}

impl RewriteProbabilities {
    /// Probabilities that make every randomized edit fire.
    pub fn always() -> Self {
        Self {
            structure: 1.0,
            hesitation: 1.0,
            nuance: 1.0,
            punctuation: 1.0,
        }
    }

    /// Probabilities that suppress every randomized edit.
    pub fn never() -> Self {
        Self {
            structure: 0.0,
            hesitation: 0.0,
            nuance: 0.0,
            punctuation: 0.0,
        }
    }

    /// Checks that every probability lies in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("structure", self.structure),
            ("hesitation", self.hesitation),
            ("nuance", self.nuance),
            ("punctuation", self.punctuation),
        ];

        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!(
                    "probabilities.{} must be between 0.0 and 1.0, got {}",
                    name, value
                ));
            }
        }

        Ok(())
    }
}

fn default_structure() -> f64 {
    0.4
}

fn default_hesitation() -> f64 {
    0.1
}

fn default_nuance() -> f64 {
    0.3
}

fn default_punctuation() -> f64 {
    0.2
}

/// Picks a uniformly random phrase from a non-empty list.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, phrases: &[&'a str]) -> &'a str {
    phrases[rng.gen_range(0..phrases.len())]
}

/// Draws a Bernoulli trial with the given probability.
///
/// Out-of-range values are clamped, so `1.0` always fires and `0.0` never does.
pub(crate) fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    if probability.is_nan() {
        return false;
    }
    rng.gen_bool(probability.clamp(0.0, 1.0))
}
