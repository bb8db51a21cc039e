use rand::Rng;

use crate::core::Vec3;
use crate::spatial::BodyStore;

/// Explosion: add a random kick to every body. Horizontal components are
/// centered on zero, the vertical one only points up. Purely additive.
pub fn apply_impulse<R: Rng>(store: &mut BodyStore, force: f32, rng: &mut R) {
    for v in store.velocities_mut() {
        let kick = Vec3::new(
            (rng.gen::<f32>() - 0.5) * force,
            rng.gen::<f32>() * force,
            (rng.gen::<f32>() - 0.5) * force,
        );
        *v += kick;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyInit;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn kicks_are_bounded_and_upward() {
        let mut store = BodyStore::new();
        for i in 0..32 {
            store.add(BodyInit::new([i as f32, 1.0, 0.0], [1.0, 0.0, -1.0], 1.0)).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(42);
        apply_impulse(&mut store, 2.0, &mut rng);

        for v in store.velocities() {
            assert!(v.x >= 0.0 && v.x <= 2.0);
            assert!(v.y >= 0.0 && v.y < 2.0);
            assert!(v.z >= -2.0 && v.z <= 0.0);
        }
        assert!(store.velocities().iter().any(|v| v.y > 0.0));
    }

    #[test]
    fn same_seed_same_kicks() {
        let mut a = BodyStore::new();
        a.add(BodyInit::new([0.0, 1.0, 0.0], [0.0; 3], 1.0)).unwrap();
        let mut b = a.clone();
        apply_impulse(&mut a, 0.5, &mut StdRng::seed_from_u64(3));
        apply_impulse(&mut b, 0.5, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.velocities(), b.velocities());
    }
}
