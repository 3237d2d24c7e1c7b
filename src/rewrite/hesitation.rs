//! Natural hesitation markers.

use super::{chance, pick};
use crate::text::split_tokens;
use rand::Rng;

/// Markers inserted as standalone tokens between words.
pub const HESITATION_MARKERS: &[&str] = &["—", "...", "well,", "actually,"];

/// Inserts hesitation markers between whitespace-delimited tokens.
///
/// Token positions are visited from the last one down to the second one, so
/// an insertion never shifts a position that is still to be visited. The
/// first token is never preceded by a marker. Tokens are rejoined with single
/// spaces.
pub fn introduce_natural_hesitation<R: Rng + ?Sized>(
    text: &str,
    probability: f64,
    rng: &mut R,
) -> String {
    let mut words = split_tokens(text);

    for index in (1..words.len()).rev() {
        if chance(rng, probability) {
            words.insert(index, pick(rng, HESITATION_MARKERS));
        }
    }

    words.join(" ")
}
