//! core::similarity
//!
//! String similarity based on the Sørensen–Dice coefficient over character
//! bigrams.
//!
//! # Scoring
//!
//! Whitespace is removed from both strings before scoring. Identical
//! strings score `1.0`; a string shorter than two characters (that is not
//! identical to the other) scores `0.0`. Otherwise the score is
//!
//! ```text
//! 2 * |bigrams(a) ∩ bigrams(b)| / (len(a) + len(b) - 2)
//! ```
//!
//! where the intersection counts repeated bigrams as often as they occur in
//! both strings. Comparison is case-sensitive.
//!
//! Lengths and bigrams are taken over UTF-16 code units, and whitespace is
//! the ECMAScript `\s` class, so scores agree with the `string-similarity`
//! package for every input, including astral characters.
//!
//! # Example
//!
//! ```
//! use reporef::core::similarity::{compare_two_strings, find_best_match};
//!
//! assert_eq!(compare_two_strings("healed", "sealed"), 0.8);
//!
//! let best = find_best_match("acme", &["acme-corp", "octocat"]).unwrap();
//! assert_eq!(best.best_match_index, 0);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::reference::WHITESPACE_CLASS;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{}+", WHITESPACE_CLASS)).unwrap());

/// Score for a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rating {
    /// The candidate string.
    pub target: String,
    /// Similarity in `[0.0, 1.0]`.
    pub rating: f64,
}

/// Result of ranking candidates against a target.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// One rating per candidate, in input order.
    pub ratings: Vec<Rating>,
    /// Index of the first candidate with the highest rating.
    pub best_match_index: usize,
}

impl BestMatch {
    /// The winning rating.
    pub fn best(&self) -> &Rating {
        &self.ratings[self.best_match_index]
    }
}

/// Compare two strings, returning a similarity in `[0.0, 1.0]`.
pub fn compare_two_strings(first: &str, second: &str) -> f64 {
    let first = code_units(first);
    let second = code_units(second);

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut first_bigrams: HashMap<(u16, u16), usize> = HashMap::new();
    for pair in first.windows(2) {
        *first_bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = first_bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2.0 * intersection as f64) / (first.len() + second.len() - 2) as f64
}

/// UTF-16 code units of `s` with whitespace removed.
fn code_units(s: &str) -> Vec<u16> {
    WHITESPACE_RUN.replace_all(s, "").encode_utf16().collect()
}

/// Rate every candidate against `target` and pick the best one.
///
/// Ties go to the earliest candidate. Returns `None` when `candidates`
/// is empty.
pub fn find_best_match<S: AsRef<str>>(target: &str, candidates: &[S]) -> Option<BestMatch> {
    if candidates.is_empty() {
        return None;
    }

    let ratings: Vec<Rating> = candidates
        .iter()
        .map(|candidate| Rating {
            target: candidate.as_ref().to_string(),
            rating: compare_two_strings(target, candidate.as_ref()),
        })
        .collect();

    let mut best_match_index = 0;
    for (i, rating) in ratings.iter().enumerate() {
        if rating.rating > ratings[best_match_index].rating {
            best_match_index = i;
        }
    }

    Some(BestMatch {
        ratings,
        best_match_index,
    })
}
