use rand::Rng;

use crate::color::{Code, PLAYABLE};

/// Draw a secret code: each slot independently and uniformly from the
/// playable colors, with replacement.
pub fn generate_code<R: Rng>(rng: &mut R) -> Code {
    std::array::from_fn(|_| PLAYABLE[rng.random_range(0..PLAYABLE.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_code_all_playable() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let code = generate_code(&mut rng);
            assert!(code.iter().all(|c| c.is_playable()));
        }
    }

    #[test]
    fn test_generate_code_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(generate_code(&mut rng1), generate_code(&mut rng2));
        }
    }

    #[test]
    fn test_generate_code_covers_palette() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; PLAYABLE.len()];
        for _ in 0..200 {
            for color in generate_code(&mut rng) {
                let i = PLAYABLE.iter().position(|c| *c == color).unwrap();
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
