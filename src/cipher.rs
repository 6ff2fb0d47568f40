//! Pure, stateless application of a candidate key to ciphertext.

use crate::key::Key;

/// Decrypt `ciphertext` under `key`.
///
/// Alphabet symbols (`A`..=`Z`) are substituted through the key; every
/// other character, including digits, punctuation and whitespace, is
/// copied through unchanged. Total and deterministic over its domain. The
/// key's bijection invariant is guaranteed at construction, so no per-call
/// check happens here.
pub fn decrypt(ciphertext: &str, key: &Key) -> String {
    ciphertext
        .chars()
        .map(|ch| {
            if ch.is_ascii_uppercase() {
                key.target(ch as u8) as char
            } else {
                ch
            }
        })
        .collect()
}
