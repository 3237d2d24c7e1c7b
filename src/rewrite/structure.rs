//! Sentence structure variation.

use super::{chance, pick};
use crate::text::{join_sentences, Sentences};
use rand::Rng;

/// Interjections that may open a sentence.
pub const INTERJECTIONS: &[&str] = &["Notably,", "Interestingly,", "Indeed,"];

/// Prepends a random interjection to some sentences.
///
/// Each sentence is considered independently with the given probability. A
/// sentence that already opens with one of the interjections is left alone so
/// the same phrase never appears twice in a row. Sentences are rejoined with
/// single spaces.
pub fn vary_sentence_structure<R: Rng + ?Sized>(
    text: &str,
    probability: f64,
    rng: &mut R,
) -> String {
    let varied: Vec<String> = Sentences::new(text)
        .map(|sentence| {
            if chance(rng, probability)
                && !INTERJECTIONS
                    .iter()
                    .any(|interjection| sentence.starts_with(interjection))
            {
                format!("{} {}", pick(rng, INTERJECTIONS), sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect();

    join_sentences(&varied)
}
