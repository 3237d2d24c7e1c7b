//! Punctuation refinement.

use super::chance;
use crate::text::{join_sentences, Sentences};
use once_cell::sync::Lazy;
use regex::Regex;
use rand::Rng;

static REPEATED_EXCLAMATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!{2,}").expect("Failed to compile exclamation regex"));

static REPEATED_QUESTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?{2,}").expect("Failed to compile question mark regex"));

/// Collapses runs of `!` and `?` to a single mark.
///
/// Idempotent: collapsing an already collapsed text returns it unchanged.
///
/// # Example
///
/// ```
/// use text_humanizer::rewrite::collapse_punctuation;
///
/// assert_eq!(collapse_punctuation("Really??? Yes!!!"), "Really? Yes!");
/// ```
pub fn collapse_punctuation(text: &str) -> String {
    let collapsed = REPEATED_EXCLAMATION.replace_all(text, "!");
    REPEATED_QUESTION.replace_all(&collapsed, "?").into_owned()
}

/// Collapses repeated marks, then turns the first comma of some sentences into a dash.
///
/// Only the first comma of a selected sentence becomes ` — `; the rest of the
/// sentence, later commas included, is kept verbatim. Sentences without a
/// comma are never changed.
pub fn refine_punctuation<R: Rng + ?Sized>(text: &str, probability: f64, rng: &mut R) -> String {
    let collapsed = collapse_punctuation(text);

    let refined: Vec<String> = Sentences::new(&collapsed)
        .map(|sentence| {
            if !chance(rng, probability) {
                return sentence.to_string();
            }
            match sentence.split_once(',') {
                Some((head, rest)) => format!("{} — {}", head, rest),
                None => sentence.to_string(),
            }
        })
        .collect();

    join_sentences(&refined)
}
