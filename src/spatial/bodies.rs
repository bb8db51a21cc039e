//! BodyStore - structure-of-arrays state for every simulated sphere
//!
//! Index order is the iteration order for every phase and for the
//! positions snapshot. Bodies are appended, never removed one by one;
//! `reset` is the only path that shrinks the store.

use rand::Rng;

use crate::core::Vec3;
use crate::domain::{BodyInit, KernelError};

/// Box that `reset` re-randomizes surviving bodies into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnVolume {
    /// Horizontal offsets are drawn from `[-half_width, half_width]` on x and z
    pub half_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl SpawnVolume {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            rng.gen_range(-self.half_width..=self.half_width),
            rng.gen_range(self.min_height..=self.max_height),
            rng.gen_range(-self.half_width..=self.half_width),
        )
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.x.abs() <= self.half_width
            && p.z.abs() <= self.half_width
            && p.y >= self.min_height
            && p.y <= self.max_height
    }
}

#[derive(Clone, Debug, Default)]
pub struct BodyStore {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) prev_positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) radii: Vec<f32>,
    pub(crate) inverse_masses: Vec<f32>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            prev_positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            radii: Vec::with_capacity(capacity),
            inverse_masses: Vec::with_capacity(capacity),
        }
    }

    /// Replace all state. The whole batch is validated before anything is
    /// touched, so a bad entry leaves the previous bodies in place.
    pub fn initialize(&mut self, bodies: &[BodyInit]) -> Result<(), KernelError> {
        for (index, body) in bodies.iter().enumerate() {
            body.validate(index)?;
        }

        self.clear();
        self.reserve(bodies.len());
        for body in bodies {
            self.push_unchecked(body);
        }
        Ok(())
    }

    /// Append one body and return its index.
    pub fn add(&mut self, body: BodyInit) -> Result<usize, KernelError> {
        body.validate(0)?;
        self.push_unchecked(&body);
        Ok(self.len() - 1)
    }

    /// Truncate to `min(len, baseline_count)` and respawn every survivor at
    /// rest somewhere inside `volume`.
    pub fn reset<R: Rng>(&mut self, baseline_count: usize, volume: &SpawnVolume, rng: &mut R) {
        let keep = self.len().min(baseline_count);
        self.positions.truncate(keep);
        self.prev_positions.truncate(keep);
        self.velocities.truncate(keep);
        self.radii.truncate(keep);
        self.inverse_masses.truncate(keep);

        for i in 0..keep {
            let p = volume.sample(rng);
            self.positions[i] = p;
            self.prev_positions[i] = p;
            self.velocities[i] = Vec3::zero();
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.prev_positions.clear();
        self.velocities.clear();
        self.radii.clear();
        self.inverse_masses.clear();
    }

    fn reserve(&mut self, additional: usize) {
        self.positions.reserve(additional);
        self.prev_positions.reserve(additional);
        self.velocities.reserve(additional);
        self.radii.reserve(additional);
        self.inverse_masses.reserve(additional);
    }

    fn push_unchecked(&mut self, body: &BodyInit) {
        let p = body.position_vec();
        self.positions.push(p);
        self.prev_positions.push(p);
        self.velocities.push(body.velocity_vec());
        self.radii.push(body.radius);
        self.inverse_masses.push(body.inverse_mass);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    pub fn previous_position(&self, i: usize) -> Vec3 {
        self.prev_positions[i]
    }

    pub fn velocity(&self, i: usize) -> Vec3 {
        self.velocities[i]
    }

    pub fn radius(&self, i: usize) -> f32 {
        self.radii[i]
    }

    pub fn inverse_mass(&self, i: usize) -> f32 {
        self.inverse_masses[i]
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub(crate) fn velocities_mut(&mut self) -> &mut [Vec3] {
        &mut self.velocities
    }

    /// Contiguous `[x0, y0, z0, x1, ...]` copy in store order.
    pub fn positions_flat(&self) -> Vec<f32> {
        flatten(&self.positions)
    }

    pub fn velocities_flat(&self) -> Vec<f32> {
        flatten(&self.velocities)
    }
}

fn flatten(values: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(values.len() * 3);
    for v in values {
        out.extend_from_slice(&[v.x, v.y, v.z]);
    }
    out
}
