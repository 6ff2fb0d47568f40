use plainsight::Key;
use quickcheck::quickcheck;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn is_bijection(key: &Key) -> bool {
    let mut seen = [false; 26];
    for &t in key.targets() {
        if !t.is_ascii_uppercase() {
            return false;
        }
        let i = (t - b'A') as usize;
        if seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

quickcheck! {
    fn shuffled_keys_are_bijections(seed: u64) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        is_bijection(&Key::shuffled(&mut rng))
    }

    fn swapping_preserves_the_bijection(seed: u64, a: u8, b: u8) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let key = Key::shuffled(&mut rng);
        let swapped = key.swap(b'A' + a % 26, b'A' + b % 26);
        is_bijection(&swapped)
    }

    fn inversion_is_an_involution(seed: u64) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let key = Key::shuffled(&mut rng);
        key.invert().invert() == key
    }

    fn frequency_keys_are_bijections(text: String) -> bool {
        is_bijection(&Key::from_frequency(&text))
    }
}
