//! Sentence and token splitting helpers.
//!
//! The rewrite operations work either on sentences or on whitespace-delimited
//! tokens. A sentence boundary is a `.`, `!` or `?` immediately followed by
//! one or more whitespace characters; the whitespace itself is dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a terminal punctuation mark followed by the whitespace run that
/// separates it from the next sentence.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("Failed to compile sentence boundary regex"));

/// Lazy iterator over the sentences of a text.
///
/// The text is trimmed once up front. Each yielded slice keeps its terminal
/// punctuation. Input without any boundary yields exactly one item: the whole
/// trimmed text (which may be empty).
///
/// # Example
///
/// ```
/// use text_humanizer::text::Sentences;
///
/// let sentences: Vec<&str> = Sentences::new("A. B! C?").collect();
/// assert_eq!(sentences, vec!["A.", "B!", "C?"]);
/// ```
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    position: usize,
    finished: bool,
}

impl<'a> Sentences<'a> {
    /// Creates a sentence iterator over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text: text.trim(),
            position: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match SENTENCE_BOUNDARY.find_at(self.text, self.position) {
            Some(boundary) => {
                // The punctuation mark is a single ASCII byte
                let sentence = &self.text[self.position..boundary.start() + 1];
                self.position = boundary.end();
                Some(sentence)
            }
            None => {
                self.finished = true;
                Some(&self.text[self.position..])
            }
        }
    }
}

/// Splits text into sentences.
///
/// Materialized form of [`Sentences`].
pub fn split_sentences(text: &str) -> Vec<&str> {
    Sentences::new(text).collect()
}

/// Joins sentences back together with single spaces.
///
/// Original inter-sentence whitespace (newlines, double spaces) is not
/// preserved.
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    sentences
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits text into whitespace-delimited tokens.
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Counts sentences using the same boundary rule as [`Sentences`].
pub fn sentence_count(text: &str) -> usize {
    Sentences::new(text).count()
}
