//! Core logic for the plainsight substitution-cipher solver.
//!
//! Given a message encoded with a monoalphabetic substitution cipher, the
//! crate recovers the most plausible plaintext without knowledge of the
//! key. A trigram language model scores candidate decryptions and a
//! hill-climbing search with random restarts explores the space of
//! permutation keys.

pub mod cipher;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod key;
pub mod model;
pub mod search;
pub mod stats;

pub use cipher::decrypt;
pub use config::SearchConfig;
pub use error::PlainsightError;
pub use key::Key;
pub use model::TrigramModel;
pub use search::{climb, crack, crack_with, Candidate, Climb};
pub use stats::Stats;

/// Number of symbols in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The fixed cipher alphabet, `A` through `Z`.
pub const ALPHABET: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// English letters ordered by descending corpus frequency. The
/// frequency-rank starting key assigns ciphertext letters onto this order.
pub const ENGLISH_FREQUENCY_ORDER: [u8; ALPHABET_LEN] = *b"ETAOINSHRDLCUMWFGYPBVKJXQZ";
