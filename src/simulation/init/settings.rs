use crate::domain::{KernelError, SolverParams};

use super::perf_stats::PerfStats;
use super::KernelCore;

pub(super) fn enable_perf_metrics(kernel: &mut KernelCore, enabled: bool) {
    kernel.perf_enabled = enabled;
    if !enabled {
        kernel.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(kernel: &KernelCore) -> PerfStats {
    kernel.perf_stats.clone()
}

/// Swap solver params. Invalid params are rejected and the old ones kept.
pub(super) fn configure(kernel: &mut KernelCore, params: SolverParams) -> Result<(), KernelError> {
    params.validate()?;
    kernel_log!(
        "solver configured: {} substeps x {} iterations, half extent {}",
        params.substeps,
        params.iterations,
        params.world_half_extent
    );
    kernel.params = params;
    Ok(())
}

pub(super) fn configure_json(kernel: &mut KernelCore, json: &str) -> Result<(), KernelError> {
    let params = SolverParams::from_json(json)?;
    configure(kernel, params)
}
