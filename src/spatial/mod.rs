//! Body storage.
//!
//! A broad-phase (uniform grid or sort-and-sweep over `BodyStore`
//! positions) would live here once body counts outgrow the `O(n²)` pair pass.

pub mod bodies;

pub use bodies::{BodyStore, SpawnVolume};
