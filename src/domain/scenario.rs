//! Scenario bundles: parameters plus an initial particle list, loaded from JSON.
//!
//! ```json
//! {
//!   "params": { "gravitationalConstant": 200.0, "collisionMode": "absorb" },
//!   "particles": [
//!     { "position": [-5.0, 0.0], "velocity": [0.0, 0.0], "mass": 10.0, "radius": 1.0, "color": 16711680 },
//!     { "position": [5.0, 0.0], "mass": 10.0, "color": 255 }
//!   ]
//! }
//! ```
//!
//! `velocity` defaults to zero and `radius` to `sqrt(mass)`.

use serde::Deserialize;

use super::error::SimError;
use super::params::SimParams;

#[derive(Clone, Debug, Deserialize)]
pub struct ParticleSpec {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub mass: f64,
    pub radius: Option<f64>,
    #[serde(default = "default_color")]
    pub color: u32,
}

fn default_color() -> u32 {
    0xFF_FF_FF
}

impl ParticleSpec {
    pub fn radius(&self) -> f64 {
        self.radius.unwrap_or_else(|| self.mass.sqrt())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub params: Option<SimParams>,
    #[serde(default)]
    pub particles: Vec<ParticleSpec>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reject values the physics cannot handle: non-finite numbers, negative
/// mass or radius.
pub fn validate_particle(
    position: [f64; 2],
    velocity: [f64; 2],
    mass: f64,
    radius: f64,
) -> Result<(), SimError> {
    if !position.iter().chain(velocity.iter()).all(|v| v.is_finite()) {
        return Err(SimError::InvalidParticle(
            "position and velocity must be finite".to_string(),
        ));
    }
    if !(mass.is_finite() && mass >= 0.0) {
        return Err(SimError::InvalidParticle(format!("mass must be >= 0, got {}", mass)));
    }
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(SimError::InvalidParticle(format!("radius must be >= 0, got {}", radius)));
    }
    Ok(())
}
