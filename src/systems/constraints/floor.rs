use crate::spatial::BodyStore;

/// Push bodies out of the floor plane `y = radius` and bleed horizontal
/// velocity. Runs once per constraint pass, so a resting body is slowed
/// `iterations` times per substep.
///
/// Returns the number of bodies that were in contact.
pub fn project_floor(store: &mut BodyStore, friction: f32) -> u32 {
    let mut contacts = 0;
    for ((p, v), &r) in store
        .positions
        .iter_mut()
        .zip(store.velocities.iter_mut())
        .zip(store.radii.iter())
    {
        if p.y < r {
            p.y = r;
            v.x *= friction;
            v.z *= friction;
            contacts += 1;
        }
    }
    contacts
}
