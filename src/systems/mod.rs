//! Per-substep phases, each taking the body store by exclusive reference:
//! `integrator::predict` → `constraints::solve` → `velocity::reconstruct`.
//! `impulse` is the one command that edits velocities directly.

pub mod constraints;
pub mod impulse;
pub mod integrator;
pub mod velocity;
