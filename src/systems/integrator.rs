//! Prediction phase
//!
//! Per body, per substep: gravity, damping, snapshot, integrate. Bodies are
//! independent here, so the `parallel` feature splits the loop with Rayon.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Vec3;
use crate::domain::SolverParams;
use crate::spatial::BodyStore;

#[inline]
fn predict_body(
    p: &mut Vec3,
    prev: &mut Vec3,
    v: &mut Vec3,
    inverse_mass: f32,
    gravity_h: f32,
    damping: f32,
    h: f32,
) {
    // Immovable bodies ignore gravity and keep their place.
    if inverse_mass == 0.0 {
        *prev = *p;
        *v = Vec3::zero();
        return;
    }
    v.y += gravity_h;
    *v *= damping;
    *prev = *p;
    *p += *v * h;
}

/// Advance every body's velocity and position by one substep of length `h`.
pub fn predict(store: &mut BodyStore, params: &SolverParams, h: f32) {
    let gravity_h = params.gravity * h;
    let damping = params.damping;

    #[cfg(feature = "parallel")]
    {
        store
            .positions
            .par_iter_mut()
            .zip(store.prev_positions.par_iter_mut())
            .zip(store.velocities.par_iter_mut())
            .zip(store.inverse_masses.par_iter())
            .for_each(|(((p, prev), v), &w)| predict_body(p, prev, v, w, gravity_h, damping, h));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (((p, prev), v), &w) in store
            .positions
            .iter_mut()
            .zip(store.prev_positions.iter_mut())
            .zip(store.velocities.iter_mut())
            .zip(store.inverse_masses.iter())
        {
            predict_body(p, prev, v, w, gravity_h, damping, h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyInit;

    #[test]
    fn gravity_then_damping_then_integrate() {
        let mut store = BodyStore::new();
        store.add(BodyInit::new([0.0, 10.0, 0.0], [1.0, 0.0, -2.0], 1.0)).unwrap();
        let params = SolverParams::default();
        let h = 0.5;

        predict(&mut store, &params, h);

        let vy = params.gravity * h * params.damping;
        let v = store.velocity(0);
        assert_eq!(v.x, params.damping);
        assert_eq!(v.y, vy);
        assert_eq!(v.z, -2.0 * params.damping);

        assert_eq!(store.previous_position(0), Vec3::new(0.0, 10.0, 0.0));
        let p = store.position(0);
        assert_eq!(p.x, params.damping * h);
        assert_eq!(p.y, 10.0 + vy * h);
    }

    #[test]
    fn damping_compounds_per_substep() {
        let mut params = SolverParams::default();
        params.gravity = 0.0;
        let mut store = BodyStore::new();
        store.add(BodyInit::new([0.0, 5.0, 0.0], [1.0, 0.0, 0.0], 1.0)).unwrap();

        for _ in 0..4 {
            predict(&mut store, &params, 0.25);
        }
        let expected = params.damping.powi(4);
        assert!((store.velocity(0).x - expected).abs() < 1e-6);
    }

    #[test]
    fn immovable_bodies_stay_put() {
        let mut store = BodyStore::new();
        store
            .add(BodyInit::new([1.0, 4.0, 1.0], [3.0, 0.0, 0.0], 1.0).with_inverse_mass(0.0))
            .unwrap();
        predict(&mut store, &SolverParams::default(), 0.125);
        assert_eq!(store.position(0), Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(store.velocity(0), Vec3::zero());
    }
}
