//! Trigram language model used to score candidate plaintexts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::PlainsightError;

/// Normalize text for trigram counting: ASCII letters are uppercased,
/// every other character becomes whitespace, whitespace runs collapse to a
/// single space, and two leading spaces are prepended so the first real
/// trigrams capture word-start context.
fn normalize(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.extend_from_slice(b"  ");
    let mut in_gap = true;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            out.push(ch.to_ascii_uppercase() as u8);
            in_gap = false;
        } else if !in_gap {
            out.push(b' ');
            in_gap = true;
        }
    }
    // Drop the trailing separator, if any, to match the padding contract.
    if in_gap && out.len() > 2 {
        out.pop();
    }
    out
}

/// Log-probability model over 3-byte windows of normalized text.
///
/// Built once from a training corpus and immutable afterwards. Laplace
/// smoothing keeps every window score finite: windows never observed in
/// training share a single default log-probability instead of an infinite
/// penalty. Working in the log domain turns products of probabilities into
/// sums, so long texts do not underflow.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrigramModel {
    probs: HashMap<[u8; 3], f64>,
    default: f64,
}

impl TrigramModel {
    /// Count trigram windows in the normalized corpus and smooth them.
    ///
    /// A corpus too small to populate many distinct trigrams still builds,
    /// but the resulting model is dominated by the unseen default and
    /// search quality degrades accordingly.
    pub fn build(corpus: &str) -> Self {
        let padded = normalize(corpus);
        let mut counts: HashMap<[u8; 3], u64> = HashMap::new();
        for win in padded.windows(3) {
            *counts.entry([win[0], win[1], win[2]]).or_insert(0) += 1;
        }
        Self::from_counts(&counts)
    }

    /// Apply Laplace smoothing to raw window counts.
    ///
    /// An observed window with count `c` gets `ln((c + 1) / (total + V))`
    /// where `V` is the number of distinct windows and `total` the number
    /// counted; every unseen window shares `ln(1 / (total + V))`.
    pub fn from_counts(counts: &HashMap<[u8; 3], u64>) -> Self {
        let total: u64 = counts.values().sum();
        let denom = (total + counts.len() as u64) as f64;
        if denom == 0.0 {
            // Degenerate empty model: every window scores the same.
            return Self {
                probs: HashMap::new(),
                default: 0.0,
            };
        }
        let probs = counts
            .iter()
            .map(|(&tri, &c)| (tri, ((c + 1) as f64 / denom).ln()))
            .collect();
        Self {
            probs,
            default: (1.0 / denom).ln(),
        }
    }

    /// Score text for English-likeness; higher (less negative) is more
    /// plausible.
    ///
    /// Deterministic for a fixed model. Input that normalizes to nothing
    /// (empty or all separators) has no windows at all and scores `0.0`,
    /// which is not meaningful for comparison against real candidates.
    pub fn score(&self, text: &str) -> f64 {
        let padded = normalize(text);
        padded
            .windows(3)
            .map(|w| self.log_prob([w[0], w[1], w[2]]))
            .sum()
    }

    /// Log-probability of a single window, falling back to the unseen
    /// default.
    pub fn log_prob(&self, window: [u8; 3]) -> f64 {
        self.probs.get(&window).copied().unwrap_or(self.default)
    }

    /// Log-probability assigned to windows never seen in training.
    pub fn unseen_log_prob(&self) -> f64 {
        self.default
    }

    /// Number of distinct windows observed in training.
    pub fn distinct_windows(&self) -> usize {
        self.probs.len()
    }

    /// Serialize this model to disk with bincode.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlainsightError> {
        let data = bincode::serialize(self)
            .map_err(|e| PlainsightError::Model(format!("serialize failed: {e}")))?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Load a model previously written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlainsightError> {
        let data = fs::read(path)?;
        bincode::deserialize(&data)
            .map_err(|e| PlainsightError::Model(format!("deserialize failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_punctuation_and_runs() {
        assert_eq!(normalize("Hello,   World!"), b"  HELLO WORLD");
        assert_eq!(normalize("a-b_c"), b"  A B C");
    }

    #[test]
    fn normalize_strips_leading_and_trailing_separators() {
        assert_eq!(normalize("  fox.  "), b"  FOX");
        assert_eq!(normalize(",.!?"), b"  ");
        assert_eq!(normalize(""), b"  ");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(normalize("caf\u{e9} au lait"), b"  CAF AU LAIT");
    }

    #[test]
    fn build_counts_windows_of_the_padded_corpus() {
        // "  AB AB" has five windows, " AB" occurring twice.
        let model = TrigramModel::build("ab ab");
        assert_eq!(model.distinct_windows(), 4);
        let denom = 9.0_f64; // total 5 + V 4
        assert!((model.log_prob(*b" AB") - (3.0 / denom).ln()).abs() < 1e-12);
        assert!((model.log_prob(*b"AB ") - (2.0 / denom).ln()).abs() < 1e-12);
        assert!((model.unseen_log_prob() - (1.0 / denom).ln()).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_builds_a_degenerate_model() {
        let model = TrigramModel::build("");
        assert_eq!(model.distinct_windows(), 0);
        assert_eq!(model.score("anything at all"), 0.0);
    }
}
