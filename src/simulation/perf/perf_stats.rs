use wasm_bindgen::prelude::*;

use crate::systems::constraints::SolverCounters;

/// Snapshot of the last `advance` (all zeros while perf is disabled).
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) solve_ms: f64,
    pub(super) reconstruct_ms: f64,
    pub(super) substeps: u32,
    pub(super) iterations: u32,
    pub(super) body_count: u32,
    pub(super) pair_checks: u32,
    pub(super) contacts_resolved: u32,
    pub(super) floor_contacts: u32,
    pub(super) wall_contacts: u32,
}

fn clamp_u32(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    /// Counters wider than `u32` are clamped for the JS side.
    pub(crate) fn record_counters(&mut self, counters: &SolverCounters) {
        self.pair_checks = clamp_u32(counters.pair_checks);
        self.contacts_resolved = clamp_u32(counters.contacts_resolved);
        self.floor_contacts = clamp_u32(counters.floor_contacts);
        self.wall_contacts = clamp_u32(counters.wall_contacts);
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn solve_ms(&self) -> f64 { self.solve_ms }
    #[wasm_bindgen(getter)]
    pub fn reconstruct_ms(&self) -> f64 { self.reconstruct_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 { self.iterations }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
}
