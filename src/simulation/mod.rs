//! KernelCore - owner of the body store and the only thing that mutates it
//!
//! Every command entry point takes `&mut self`, so an advance always runs
//! all substeps and passes before the next spawn/impulse/reset is applied.
//! Hosts either keep the core inside a web worker (`Kernel` facade) or move
//! it onto a dedicated thread (`KernelWorker`); neither shares it.
//!
//! Orchestration only; the phase math lives in `systems/`.

use rand::rngs::StdRng;

use crate::api::protocol::{Command, Response};
use crate::domain::{BodyInit, KernelError, SolverParams};
use crate::spatial::BodyStore;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/dispatch.rs"]
mod dispatch;
mod facade;
#[cfg(not(target_arch = "wasm32"))]
mod worker;

pub use facade::Kernel;
pub use perf_stats::PerfStats;
#[cfg(not(target_arch = "wasm32"))]
pub use worker::KernelWorker;

pub struct KernelCore {
    store: BodyStore,
    params: SolverParams,
    rng: StdRng,
    seed: u64,

    // State
    tick: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl KernelCore {
    /// Default params, default seed
    pub fn new() -> Self {
        init::create_kernel_core(SolverParams::default(), random::DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        init::create_kernel_core(SolverParams::default(), seed)
    }

    pub fn with_params(params: SolverParams, seed: u64) -> Result<Self, KernelError> {
        params.validate()?;
        Ok(init::create_kernel_core(params, seed))
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks advanced since the last `initialize`
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn body_count(&self) -> usize {
        self.store.len()
    }

    /// Read-only view for hosts and tests; never handed out mutably.
    pub fn bodies(&self) -> &BodyStore {
        &self.store
    }

    pub fn positions(&self) -> Vec<f32> {
        self.store.positions_flat()
    }

    pub fn velocities(&self) -> Vec<f32> {
        self.store.velocities_flat()
    }

    pub fn configure(&mut self, params: SolverParams) -> Result<(), KernelError> {
        settings::configure(self, params)
    }

    pub fn configure_json(&mut self, json: &str) -> Result<(), KernelError> {
        settings::configure_json(self, json)
    }

    /// Enable or disable per-advance perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last advance perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Replace all bodies. On error nothing changes.
    pub fn initialize(&mut self, bodies: &[BodyInit]) -> Result<(), KernelError> {
        commands::initialize(self, bodies)
    }

    /// Append one body, returning its index in the positions snapshot
    pub fn spawn(&mut self, body: BodyInit) -> Result<usize, KernelError> {
        commands::spawn(self, body)
    }

    /// Add a random outward kick to every body
    pub fn impulse(&mut self) {
        commands::impulse(self)
    }

    /// Truncate to `baseline_count` bodies and respawn the survivors at rest
    pub fn reset(&mut self, baseline_count: usize) {
        commands::reset(self, baseline_count)
    }

    /// Step the simulation one tick and return the new positions
    /// (`3 * body_count` floats, store order).
    pub fn advance(&mut self, dt: Option<f32>) -> Vec<f32> {
        step::advance(self, dt)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Response, KernelError> {
        dispatch::dispatch(self, command)
    }

    pub fn dispatch_json(&mut self, json: &str) -> Result<Response, KernelError> {
        dispatch::dispatch_json(self, json)
    }
}

impl Default for KernelCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
