use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::SolverParams;
use crate::spatial::SpawnVolume;

pub(crate) const DEFAULT_SEED: u64 = 12345;

/// Reproducible generator: same seed, same resets and impulses.
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(crate) fn spawn_volume(params: &SolverParams) -> SpawnVolume {
    SpawnVolume {
        half_width: params.spawn_half_width,
        min_height: params.spawn_min_height,
        max_height: params.spawn_max_height,
    }
}
