use crate::systems::constraints::{self, SolverCounters};
use crate::systems::{integrator, velocity};

use super::perf_timer::{timed, PerfTimer};
use super::KernelCore;

/// One tick: `substeps` rounds of predict → solve → reconstruct.
///
/// Runs to completion; nothing else may touch the store meanwhile.
pub(super) fn advance(kernel: &mut KernelCore, dt: Option<f32>) -> Vec<f32> {
    let perf_on = kernel.perf_enabled;
    if perf_on {
        kernel.perf_stats.reset();
        kernel.perf_stats.substeps = kernel.params.substeps;
        kernel.perf_stats.iterations = kernel.params.iterations;
        kernel.perf_stats.body_count = kernel.store.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let h = kernel.params.substep_dt(dt);
    let mut counters = SolverCounters::default();

    for _ in 0..kernel.params.substeps {
        timed(perf_on, &mut kernel.perf_stats.integrate_ms, || {
            integrator::predict(&mut kernel.store, &kernel.params, h)
        });

        timed(perf_on, &mut kernel.perf_stats.solve_ms, || {
            constraints::solve(&mut kernel.store, &kernel.params, &mut counters)
        });

        timed(perf_on, &mut kernel.perf_stats.reconstruct_ms, || {
            velocity::reconstruct(&mut kernel.store, h, kernel.params.rest_velocity_threshold)
        });
    }

    kernel.tick += 1;

    if let Some(t0) = step_start {
        kernel.perf_stats.record_counters(&counters);
        kernel.perf_stats.step_ms = t0.elapsed_ms();
    }

    kernel.store.positions_flat()
}
