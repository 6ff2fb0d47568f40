//! Permutation keys over the cipher alphabet.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PlainsightError;
use crate::{ALPHABET, ALPHABET_LEN, ENGLISH_FREQUENCY_ORDER};

/// A bijective mapping from the cipher alphabet onto itself.
///
/// Index 0 holds the target for `A`. Every `Key` is a complete permutation
/// by construction, so the hot decrypt path never re-checks the invariant.
/// Keys are immutable values; mutation always produces a fresh copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key([u8; ALPHABET_LEN]);

impl Key {
    /// The key mapping every letter to itself.
    pub fn identity() -> Self {
        Key(ALPHABET)
    }

    /// A uniformly random permutation key.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut targets = ALPHABET;
        targets.shuffle(rng);
        Key(targets)
    }

    /// Build a key from an explicit target table, checking the bijection
    /// invariant. Construction boundaries go through here; search-internal
    /// paths preserve the invariant structurally and skip the check.
    pub fn from_mapping(targets: [u8; ALPHABET_LEN]) -> Result<Self, PlainsightError> {
        let mut seen = [false; ALPHABET_LEN];
        for &t in &targets {
            if !t.is_ascii_uppercase() {
                return Err(PlainsightError::InvalidKey(format!(
                    "target {:?} outside the alphabet",
                    t as char
                )));
            }
            let i = (t - b'A') as usize;
            if seen[i] {
                return Err(PlainsightError::InvalidKey(format!(
                    "duplicate target {}",
                    t as char
                )));
            }
            seen[i] = true;
        }
        Ok(Key(targets))
    }

    /// Starting key for the first restart of a search.
    ///
    /// Ciphertext letters ranked by descending frequency (ties broken by
    /// first appearance) are assigned, in rank order, to English letters in
    /// known-frequency order. Letters absent from the ciphertext take the
    /// leftover targets in alphabet order.
    pub fn from_frequency(ciphertext: &str) -> Self {
        let mut counts = [0u64; ALPHABET_LEN];
        let mut first_seen = [usize::MAX; ALPHABET_LEN];
        for (pos, ch) in ciphertext.chars().enumerate() {
            if ch.is_ascii_alphabetic() {
                let i = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
                counts[i] += 1;
                if first_seen[i] == usize::MAX {
                    first_seen[i] = pos;
                }
            }
        }

        let mut present: Vec<usize> = (0..ALPHABET_LEN).filter(|&i| counts[i] > 0).collect();
        present.sort_by(|&a, &b| {
            counts[b]
                .cmp(&counts[a])
                .then(first_seen[a].cmp(&first_seen[b]))
        });
        let absent = (0..ALPHABET_LEN).filter(|&i| counts[i] == 0);

        let mut targets = [0u8; ALPHABET_LEN];
        for (rank, src) in present.into_iter().chain(absent).enumerate() {
            targets[src] = ENGLISH_FREQUENCY_ORDER[rank];
        }
        Key(targets)
    }

    /// Target letter for a source letter. `src` must be `A`..=`Z`.
    #[inline]
    pub fn target(&self, src: u8) -> u8 {
        self.0[(src - b'A') as usize]
    }

    /// New key with the target assignments of `a` and `b` exchanged.
    ///
    /// The originating key is untouched; every neighbor produced during a
    /// search is an independent value.
    pub fn swap(&self, a: u8, b: u8) -> Self {
        let mut targets = self.0;
        targets.swap((a - b'A') as usize, (b - b'A') as usize);
        Key(targets)
    }

    /// The inverse permutation: `invert().target(self.target(c)) == c`.
    pub fn invert(&self) -> Self {
        let mut targets = [0u8; ALPHABET_LEN];
        for (i, &t) in self.0.iter().enumerate() {
            targets[(t - b'A') as usize] = ALPHABET[i];
        }
        Key(targets)
    }

    /// The raw target table, indexed by source letter.
    pub fn targets(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }
}
