use crate::domain::{BodyInit, KernelError};
use crate::systems::impulse::apply_impulse;

use super::random::spawn_volume;
use super::KernelCore;

pub(super) fn initialize(kernel: &mut KernelCore, bodies: &[BodyInit]) -> Result<(), KernelError> {
    kernel.store.initialize(bodies)?;
    kernel.tick = 0;
    kernel_log!("initialized {} bodies", bodies.len());
    Ok(())
}

pub(super) fn spawn(kernel: &mut KernelCore, body: BodyInit) -> Result<usize, KernelError> {
    kernel.store.add(body)
}

pub(super) fn impulse(kernel: &mut KernelCore) {
    let force = kernel.params.impulse_force;
    apply_impulse(&mut kernel.store, force, &mut kernel.rng);
}

pub(super) fn reset(kernel: &mut KernelCore, baseline_count: usize) {
    let volume = spawn_volume(&kernel.params);
    let before = kernel.store.len();
    kernel.store.reset(baseline_count, &volume, &mut kernel.rng);
    kernel_log!("reset: {} -> {} bodies", before, kernel.store.len());
}
