//! Core utilities: vector math, safety and logging macros.

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
#[macro_use]
#[path = "utils/logging.rs"]
pub mod logging;
pub mod vec3;

pub use vec3::Vec3;
