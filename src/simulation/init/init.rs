use crate::domain::SolverParams;
use crate::spatial::BodyStore;

use super::perf_stats::PerfStats;
use super::random::seeded_rng;
use super::KernelCore;

pub(super) fn create_kernel_core(params: SolverParams, seed: u64) -> KernelCore {
    KernelCore {
        store: BodyStore::with_capacity(64),
        params,
        rng: seeded_rng(seed),
        seed,
        tick: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
