use rand::Rng;

/// Uniform double in `[min, max]`.
pub fn rand_double<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen_range(min..=max)
}

/// Uniform float in `[min, max]`.
pub fn rand_float<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.gen_range(min..=max)
}

/// Uniform integer in `[min, max]` inclusive.
pub fn rand_int<R: Rng>(rng: &mut R, min: usize, max: usize) -> usize {
    rng.gen_range(min..=max)
}

/// Fair coin flip.
pub fn rand_bool<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rand_double_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rand_double(&mut rng, 1.0, 150.0);
            assert!((1.0..=150.0).contains(&v));
        }
    }

    #[test]
    fn rand_int_covers_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[rand_int(&mut rng, 0, 3)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
