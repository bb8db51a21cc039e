//! Solver parameters
//!
//! Damping and friction are applied per substep and per constraint pass
//! respectively, not normalized to `dt`. Changing `substeps` or `iterations`
//! therefore changes how the simulation feels; existing scenes depend on it.

use serde::{Deserialize, Serialize};

use super::error::KernelError;

pub const DEFAULT_SUBSTEPS: u32 = 8;
pub const DEFAULT_ITERATIONS: u32 = 4;
pub const GRAVITY: f32 = -0.02;
pub const DAMPING: f32 = 0.995;
pub const FLOOR_FRICTION: f32 = 0.95;
pub const WALL_RESTITUTION: f32 = -0.5;
pub const WORLD_HALF_EXTENT: f32 = 20.0;
pub const REST_VELOCITY_THRESHOLD: f32 = 0.001;
pub const CONTACT_EPSILON: f32 = 1e-6;
pub const DEFAULT_DT: f32 = 1.0;
pub const IMPULSE_FORCE: f32 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverParams {
    pub substeps: u32,
    /// Constraint passes per substep
    pub iterations: u32,
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    pub damping: f32,
    pub friction: f32,
    pub wall_restitution: f32,
    pub world_half_extent: f32,
    pub rest_velocity_threshold: f32,
    /// Squared distance below which two centers count as coincident
    pub contact_epsilon: f32,
    pub default_dt: f32,
    pub impulse_force: f32,
    pub spawn_half_width: f32,
    pub spawn_min_height: f32,
    pub spawn_max_height: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            substeps: DEFAULT_SUBSTEPS,
            iterations: DEFAULT_ITERATIONS,
            gravity: GRAVITY,
            damping: DAMPING,
            friction: FLOOR_FRICTION,
            wall_restitution: WALL_RESTITUTION,
            world_half_extent: WORLD_HALF_EXTENT,
            rest_velocity_threshold: REST_VELOCITY_THRESHOLD,
            contact_epsilon: CONTACT_EPSILON,
            default_dt: DEFAULT_DT,
            impulse_force: IMPULSE_FORCE,
            spawn_half_width: 5.0,
            spawn_min_height: 10.0,
            spawn_max_height: 30.0,
        }
    }
}

impl SolverParams {
    pub fn from_json(json: &str) -> Result<Self, KernelError> {
        let params: SolverParams =
            serde_json::from_str(json).map_err(|e| KernelError::InvalidConfig(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), KernelError> {
        let finite = [
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("friction", self.friction),
            ("wallRestitution", self.wall_restitution),
            ("worldHalfExtent", self.world_half_extent),
            ("restVelocityThreshold", self.rest_velocity_threshold),
            ("contactEpsilon", self.contact_epsilon),
            ("defaultDt", self.default_dt),
            ("impulseForce", self.impulse_force),
            ("spawnHalfWidth", self.spawn_half_width),
            ("spawnMinHeight", self.spawn_min_height),
            ("spawnMaxHeight", self.spawn_max_height),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(KernelError::InvalidConfig(format!("{} must be finite", name)));
        }

        if self.substeps == 0 {
            return Err(KernelError::InvalidConfig("substeps must be >= 1".into()));
        }
        if self.iterations == 0 {
            return Err(KernelError::InvalidConfig("iterations must be >= 1".into()));
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(KernelError::InvalidConfig(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.friction <= 0.0 || self.friction > 1.0 {
            return Err(KernelError::InvalidConfig(format!(
                "friction must be in (0, 1], got {}",
                self.friction
            )));
        }
        if self.world_half_extent <= 0.0 {
            return Err(KernelError::InvalidConfig("worldHalfExtent must be > 0".into()));
        }
        if self.default_dt <= 0.0 || !(self.default_dt / self.substeps as f32).is_normal() {
            return Err(KernelError::InvalidConfig(format!(
                "defaultDt must give a normal substep length, got {}",
                self.default_dt
            )));
        }
        if self.rest_velocity_threshold < 0.0 || self.contact_epsilon < 0.0 {
            return Err(KernelError::InvalidConfig("thresholds must be >= 0".into()));
        }
        if self.spawn_half_width < 0.0 || self.spawn_min_height > self.spawn_max_height {
            return Err(KernelError::InvalidConfig("spawn volume is inverted".into()));
        }
        // Sampled spans must stay finite after scaling by just over 1.
        let spans = [
            2.0 * self.spawn_half_width,
            self.spawn_max_height - self.spawn_min_height,
        ];
        if spans.iter().any(|span| !(span * 2.0).is_finite()) {
            return Err(KernelError::InvalidConfig("spawn volume is too large".into()));
        }
        Ok(())
    }

    /// Substep length for a tick. Absent, non-positive or non-finite `dt`
    /// falls back to `default_dt`, as does any `dt` too small to split into
    /// normal (non-zero, non-subnormal) substeps.
    pub fn substep_dt(&self, dt: Option<f32>) -> f32 {
        let substeps = self.substeps as f32;
        match dt {
            Some(dt) if dt.is_finite() && (dt / substeps).is_normal() => dt / substeps,
            _ => self.default_dt / substeps,
        }
    }
}
