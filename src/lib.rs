//! PBD Kernel - substepped position-based sphere dynamics in WASM
//!
//! Advances spherical bodies under gravity, damping, floor friction, wall
//! containment and pairwise non-penetration. Each tick is split into
//! substeps of predict → constraint passes → velocity reconstruction.
//!
//! Architecture:
//! - core/        - Vector math, safety and logging macros
//! - domain/      - Body payloads, solver params, errors
//! - spatial/     - Body store (structure of arrays)
//! - systems/     - Integrator, constraints, velocity reconstruction, impulse
//! - simulation/  - KernelCore orchestration, wasm facade, native worker
//! - api/         - Command protocol and public re-exports

// Macros first so every later module can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    kernel_log!("PBD kernel v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::protocol::{Command, Response};
pub use api::wasm::{Kernel, PerfStats};
pub use crate::core::Vec3;
pub use domain::{BodyInit, KernelError, SolverParams};
pub use simulation::KernelCore;
#[cfg(not(target_arch = "wasm32"))]
pub use simulation::KernelWorker;
pub use spatial::{BodyStore, SpawnVolume};
