//! Public API: the message protocol and the wasm-facing kernel object.

pub mod protocol;

pub mod wasm {
    pub use crate::simulation::{Kernel, PerfStats};
}

pub use protocol::{Command, Response};
