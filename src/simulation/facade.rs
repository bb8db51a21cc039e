use wasm_bindgen::prelude::*;

use crate::domain::{BodyInit, KernelError, SolverParams};

use super::perf_stats::PerfStats;
use super::KernelCore;

fn to_js(e: KernelError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS handle for the kernel. Meant to live inside a web worker: the main
/// thread posts commands, the worker answers with position buffers.
#[wasm_bindgen]
pub struct Kernel {
    core: KernelCore,
}

#[wasm_bindgen]
impl Kernel {
    /// Create a kernel with default solver params
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            core: KernelCore::with_seed(seed as u64),
        }
    }

    #[wasm_bindgen(js_name = withParams)]
    pub fn with_params(params_json: &str, seed: u32) -> Result<Kernel, JsValue> {
        let params = SolverParams::from_json(params_json).map_err(to_js)?;
        let core = KernelCore::with_params(params, seed as u64).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick() }

    /// Enable or disable per-advance perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last advance perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Replace solver params from a (partial) JSON object
    pub fn configure(&mut self, params_json: &str) -> Result<(), JsValue> {
        self.core.configure_json(params_json).map_err(to_js)
    }

    pub fn params_json(&self) -> String {
        self.core.params().to_json()
    }

    // === COMMANDS ===

    /// Replace all bodies from a JSON array of `{position, velocity, radius}`
    pub fn initialize(&mut self, bodies_json: &str) -> Result<(), JsValue> {
        let bodies: Vec<BodyInit> = serde_json::from_str(bodies_json)
            .map_err(|e| to_js(KernelError::InvalidCommand(e.to_string())))?;
        self.core.initialize(&bodies).map_err(to_js)
    }

    /// Append one body; returns its index
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        px: f32,
        py: f32,
        pz: f32,
        vx: f32,
        vy: f32,
        vz: f32,
        radius: f32,
    ) -> Result<u32, JsValue> {
        let body = BodyInit::new([px, py, pz], [vx, vy, vz], radius);
        self.core.spawn(body).map(|i| i as u32).map_err(to_js)
    }

    /// Step one tick. The returned Float32Array is a fresh copy the caller
    /// owns and may transfer to the main thread.
    pub fn advance(&mut self, dt: Option<f32>) -> Vec<f32> {
        self.core.advance(dt)
    }

    pub fn impulse(&mut self) {
        self.core.impulse();
    }

    pub fn reset(&mut self, baseline_count: u32) {
        self.core.reset(baseline_count as usize);
    }

    pub fn positions(&self) -> Vec<f32> {
        self.core.positions()
    }

    pub fn velocities(&self) -> Vec<f32> {
        self.core.velocities()
    }

    /// Handle one JSON command message. `advance` returns positions, every
    /// other command returns an empty array (`bodyCount` returns `[count]`).
    pub fn handle_message(&mut self, message: &str) -> Result<Vec<f32>, JsValue> {
        use crate::api::protocol::Response;

        match self.core.dispatch_json(message).map_err(to_js)? {
            Response::Positions(p) => Ok(p),
            Response::BodyCount(n) => Ok(vec![n as f32]),
            Response::Ack => Ok(Vec::new()),
        }
    }
}
