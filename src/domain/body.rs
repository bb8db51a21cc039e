use serde::{Deserialize, Serialize};

use crate::core::Vec3;

use super::error::KernelError;

pub const DEFAULT_INVERSE_MASS: f32 = 1.0;

fn default_inverse_mass() -> f32 {
    DEFAULT_INVERSE_MASS
}

/// Initial state for one body, as carried by `initialize` and `spawn`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyInit {
    pub position: [f32; 3],
    #[serde(default)]
    pub velocity: [f32; 3],
    pub radius: f32,
    /// 0 pins the body in place.
    #[serde(default = "default_inverse_mass")]
    pub inverse_mass: f32,
}

impl BodyInit {
    pub fn new(position: [f32; 3], velocity: [f32; 3], radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            inverse_mass: DEFAULT_INVERSE_MASS,
        }
    }

    pub fn with_inverse_mass(mut self, inverse_mass: f32) -> Self {
        self.inverse_mass = inverse_mass;
        self
    }

    pub fn position_vec(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn velocity_vec(&self) -> Vec3 {
        Vec3::from_array(self.velocity)
    }

    /// Check the payload; `index` is only used for the error message.
    pub fn validate(&self, index: usize) -> Result<(), KernelError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(KernelError::invalid_body(
                index,
                format!("radius must be positive and finite, got {}", self.radius),
            ));
        }
        if !self.position_vec().is_finite() {
            return Err(KernelError::invalid_body(index, "position has a non-finite component"));
        }
        if !self.velocity_vec().is_finite() {
            return Err(KernelError::invalid_body(index, "velocity has a non-finite component"));
        }
        if !self.inverse_mass.is_finite() || self.inverse_mass < 0.0 {
            return Err(KernelError::invalid_body(
                index,
                format!("inverse mass must be finite and >= 0, got {}", self.inverse_mass),
            ));
        }
        Ok(())
    }
}
