//! Transition word substitution.

use super::pick;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rand::Rng;

/// Phrases replacing additive connectives (`Furthermore`, `Moreover`, `Additionally`).
pub const ADDITIVE_REPLACEMENTS: &[&str] = &[
    "In light of this,",
    "Considering this context,",
    "From another perspective,",
];

/// Phrases replacing contrastive connectives (`However`, `Nevertheless`).
pub const CONTRASTIVE_REPLACEMENTS: &[&str] = &[
    "On the other hand,",
    "With that said,",
    "It's worth noting that",
];

static ADDITIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Furthermore|Moreover|Additionally)\b")
        .expect("Failed to compile additive connective regex")
});

static CONTRASTIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(However|Nevertheless)\b")
        .expect("Failed to compile contrastive connective regex")
});

/// Replaces whole-word connectives with randomly chosen transition phrases.
///
/// Every match is resolved independently, so a word repeated in the text
/// may receive different replacements. Matching is case-sensitive; the
/// punctuation following the connective is left in place.
pub fn add_professional_transitions<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let groups: [(&Regex, &[&str]); 2] = [
        (&*ADDITIVE_PATTERN, ADDITIVE_REPLACEMENTS),
        (&*CONTRASTIVE_PATTERN, CONTRASTIVE_REPLACEMENTS),
    ];

    let mut result = text.to_string();
    for (pattern, replacements) in groups {
        result = pattern
            .replace_all(&result, |_: &Captures| pick(&mut *rng, replacements))
            .into_owned();
    }

    result
}
