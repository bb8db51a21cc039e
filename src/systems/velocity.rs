//! Velocity reconstruction (PBD)
//!
//! After the constraint passes the velocity is whatever the position moved
//! over the substep. Tiny components are snapped to zero so resting stacks
//! do not creep.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Vec3;
use crate::spatial::BodyStore;

#[inline]
fn snap(c: f32, threshold: f32) -> f32 {
    if c.abs() < threshold {
        0.0
    } else {
        c
    }
}

#[inline]
fn reconstruct_body(p: Vec3, prev: Vec3, inv_h: f32, threshold: f32) -> Vec3 {
    let v = (p - prev) * inv_h;
    Vec3::new(snap(v.x, threshold), snap(v.y, threshold), snap(v.z, threshold))
}

/// `v = (position - previous_position) / h` for every body.
pub fn reconstruct(store: &mut BodyStore, h: f32, threshold: f32) {
    let inv_h = 1.0 / h;

    #[cfg(feature = "parallel")]
    {
        store
            .velocities
            .par_iter_mut()
            .zip(store.positions.par_iter())
            .zip(store.prev_positions.par_iter())
            .for_each(|((v, &p), &prev)| *v = reconstruct_body(p, prev, inv_h, threshold));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for ((v, &p), &prev) in store
            .velocities
            .iter_mut()
            .zip(store.positions.iter())
            .zip(store.prev_positions.iter())
        {
            *v = reconstruct_body(p, prev, inv_h, threshold);
        }
    }
}
