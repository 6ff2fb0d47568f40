//! Hill-climbing key search with random restarts.

use rand::seq::index;
use rand::Rng;

use crate::cipher::decrypt;
use crate::config::SearchConfig;
use crate::error::PlainsightError;
use crate::key::Key;
use crate::model::TrigramModel;
use crate::{ALPHABET, ALPHABET_LEN};

/// A decryption candidate: the key, the plaintext it produces and the
/// model score of that plaintext.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub key: Key,
    pub plaintext: String,
    pub score: f64,
}

/// Outcome of a single hill-climbing restart.
#[derive(Debug, Clone)]
pub struct Climb {
    /// Best candidate found by this restart.
    pub candidate: Candidate,
    /// Score after each accepted step, in order. Strictly increasing.
    pub accepted: Vec<f64>,
    /// Iterations consumed before the restart terminated.
    pub iterations: usize,
    /// True when the restart stopped because a full neighbor sample found
    /// no improvement (a local optimum); false when the iteration budget
    /// ran out first.
    pub converged: bool,
}

/// Run one restart of first-improvement hill climbing from `start`.
///
/// Each iteration samples up to `config.neighbor_samples` neighbor keys by
/// swapping two distinct random target assignments of the current key. The
/// first neighbor whose plaintext scores strictly higher replaces the
/// current key immediately and a fresh iteration begins; sampling the full
/// budget without an improvement ends the restart. Termination is
/// guaranteed: the accepted score strictly increases on every step and the
/// key space is finite, so the loop ends either at a local optimum or when
/// the iteration budget is spent.
///
/// Sampling a bounded number of swaps and taking the first improvement is
/// a deliberate trade of solution quality for speed; exhaustive
/// best-improvement search over all 325 swaps costs far more per step.
pub fn climb<R: Rng>(
    ciphertext: &str,
    model: &TrigramModel,
    start: Key,
    config: &SearchConfig,
    rng: &mut R,
) -> Climb {
    let mut key = start;
    let mut plaintext = decrypt(ciphertext, &key);
    let mut score = model.score(&plaintext);
    let mut accepted = Vec::new();
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.iterations {
        iterations += 1;
        let mut improved = false;
        for _ in 0..config.neighbor_samples {
            let pair = index::sample(rng, ALPHABET_LEN, 2);
            let neighbor = key.swap(ALPHABET[pair.index(0)], ALPHABET[pair.index(1)]);
            let text = decrypt(ciphertext, &neighbor);
            let s = model.score(&text);
            if s > score {
                key = neighbor;
                plaintext = text;
                score = s;
                accepted.push(s);
                improved = true;
                break;
            }
        }
        if !improved {
            converged = true;
            break;
        }
    }

    Climb {
        candidate: Candidate {
            key,
            plaintext,
            score,
        },
        accepted,
        iterations,
        converged,
    }
}

/// Run the full restart loop and return the best candidate seen.
///
/// The first restart starts from the frequency-rank heuristic key, every
/// later one from a uniformly random permutation. Restarts are mutually
/// independent; only the single best (plaintext, score) survives.
pub fn crack<R: Rng>(
    ciphertext: &str,
    model: &TrigramModel,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Candidate, PlainsightError> {
    crack_with(ciphertext, model, config, rng, |_, _| {})
}

/// Like [`crack`], invoking `observer` with every finished restart so that
/// callers can report progress or aggregate [`Stats`](crate::Stats). The
/// library itself never prints.
pub fn crack_with<R, F>(
    ciphertext: &str,
    model: &TrigramModel,
    config: &SearchConfig,
    rng: &mut R,
    mut observer: F,
) -> Result<Candidate, PlainsightError>
where
    R: Rng,
    F: FnMut(usize, &Climb),
{
    config.validate()?;

    let mut best: Option<Candidate> = None;
    for restart in 0..config.restarts {
        let start = if restart == 0 {
            Key::from_frequency(ciphertext)
        } else {
            Key::shuffled(rng)
        };
        let outcome = climb(ciphertext, model, start, config, rng);
        if best
            .as_ref()
            .map_or(true, |b| outcome.candidate.score > b.score)
        {
            best = Some(outcome.candidate.clone());
        }
        observer(restart, &outcome);
    }

    best.ok_or_else(|| PlainsightError::Internal("restart loop produced no candidate".into()))
}
