use plainsight::{climb, crack, crack_with, decrypt, Key, PlainsightError, SearchConfig, Stats, TrigramModel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const CORPUS: &str = "The quick brown fox jumps over the lazy dog. \
The rain in Spain stays mainly in the plain. \
To be or not to be, that is the question.";

fn scramble(plaintext: &str, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    decrypt(plaintext, &Key::shuffled(&mut rng))
}

#[test]
fn accepted_scores_increase_strictly_within_a_restart() {
    let model = TrigramModel::build(CORPUS);
    let ciphertext = scramble("THE RAIN IN SPAIN STAYS MAINLY IN THE PLAIN", 1);
    let config = SearchConfig {
        restarts: 1,
        iterations: 2_000,
        neighbor_samples: 200,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let outcome = climb(&ciphertext, &model, Key::shuffled(&mut rng), &config, &mut rng);

    for pair in outcome.accepted.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    if let Some(&last) = outcome.accepted.last() {
        assert_eq!(outcome.candidate.score, last);
    }
}

#[test]
fn restart_without_letters_converges_immediately() {
    // No alphabet symbol means every neighbor scores identically, so the
    // very first sample finds no strict improvement.
    let model = TrigramModel::build(CORPUS);
    let config = SearchConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let outcome = climb("1234 ...", &model, Key::identity(), &config, &mut rng);

    assert!(outcome.converged);
    assert_eq!(outcome.iterations, 1);
    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.candidate.plaintext, "1234 ...");
}

#[test]
fn iteration_budget_bounds_a_restart() {
    let model = TrigramModel::build(CORPUS);
    let ciphertext = scramble("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG", 4);
    let config = SearchConfig {
        restarts: 1,
        iterations: 3,
        neighbor_samples: 50,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let outcome = climb(&ciphertext, &model, Key::shuffled(&mut rng), &config, &mut rng);
    assert!(outcome.iterations <= 3);
}

#[test]
fn crack_rejects_zero_budgets() {
    let model = TrigramModel::build(CORPUS);
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for config in [
        SearchConfig { restarts: 0, ..Default::default() },
        SearchConfig { iterations: 0, ..Default::default() },
        SearchConfig { neighbor_samples: 0, ..Default::default() },
    ] {
        let err = crack("WKH", &model, &config, &mut rng).unwrap_err();
        assert!(matches!(err, PlainsightError::Config(_)));
    }
}

#[test]
fn observer_sees_every_restart_and_the_best_is_retained() {
    let model = TrigramModel::build(CORPUS);
    let ciphertext = scramble("TO BE OR NOT TO BE THAT IS THE QUESTION", 7);
    let config = SearchConfig {
        restarts: 8,
        iterations: 500,
        neighbor_samples: 100,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let mut stats = Stats::new();
    let mut observed_best = f64::NEG_INFINITY;
    let best = crack_with(&ciphertext, &model, &config, &mut rng, |_, outcome| {
        stats.record(outcome);
        observed_best = observed_best.max(outcome.candidate.score);
    })
    .unwrap();

    assert_eq!(stats.restarts, 8);
    assert_eq!(best.score, observed_best);
    assert_eq!(decrypt(&ciphertext, &best.key), best.plaintext);
}
