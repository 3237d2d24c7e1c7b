//! Contextual nuance qualifiers.

use super::{chance, pick};
use crate::text::{join_sentences, Sentences};
use rand::Rng;

/// Qualifier phrases that may open a sentence.
pub const QUALIFIERS: &[&str] = &[
    "It appears that",
    "From our analysis,",
    "Based on current insights,",
    "Our research suggests that",
];

/// Prepends a random qualifier phrase to some sentences.
///
/// Unlike [`super::vary_sentence_structure`] there is no guard against a
/// sentence already starting with a qualifier.
pub fn add_contextual_nuance<R: Rng + ?Sized>(text: &str, probability: f64, rng: &mut R) -> String {
    let nuanced: Vec<String> = Sentences::new(text)
        .map(|sentence| {
            if chance(rng, probability) {
                format!("{} {}", pick(rng, QUALIFIERS), sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect();

    join_sentences(&nuanced)
}
