use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded random number generator.
///
/// The same seed always yields the same sequence, which makes whole
/// sessions reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
