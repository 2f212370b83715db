//! Global simulation parameters and their JSON representation
//!
//! ```json
//! {
//!   "gravitationalConstant": 200.0,
//!   "elasticity": 1.0,
//!   "collisionMode": "bounce",
//!   "maxSeparationIterations": 10000
//! }
//! ```
//!
//! Missing keys keep their defaults. Values are not range-checked: a negative
//! `G` or elasticity is accepted as-is.

use serde::{Deserialize, Serialize};

pub const DEFAULT_G: f64 = 200.0;
pub const DEFAULT_ELASTICITY: f64 = 1.0;
/// Upper bound on positional correction steps in one bounce resolution
pub const DEFAULT_MAX_SEPARATION_ITERATIONS: u32 = 10_000;

/// How overlapping pairs are resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionMode {
    /// Impulse along the collision normal, then separate
    #[default]
    Bounce,
    /// Heavier particle swallows the lighter one
    Absorb,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimParams {
    pub gravitational_constant: f64,
    /// 1 = perfectly elastic, 0 = perfectly inelastic along the normal
    pub elasticity: f64,
    pub collision_mode: CollisionMode,
    pub max_separation_iterations: u32,
}

impl SimParams {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // A struct of plain numbers and a unit enum always serializes
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn absorb_mode(&self) -> bool {
        self.collision_mode == CollisionMode::Absorb
    }

    pub fn set_absorb_mode(&mut self, absorb: bool) {
        self.collision_mode = if absorb {
            CollisionMode::Absorb
        } else {
            CollisionMode::Bounce
        };
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_G,
            elasticity: DEFAULT_ELASTICITY,
            collision_mode: CollisionMode::Bounce,
            max_separation_iterations: DEFAULT_MAX_SEPARATION_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_startup() {
        let p = SimParams::default();
        assert_eq!(p.gravitational_constant, 200.0);
        assert_eq!(p.elasticity, 1.0);
        assert!(!p.absorb_mode());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p = SimParams::from_json(r#"{"collisionMode":"absorb","elasticity":0.5}"#).unwrap();
        assert!(p.absorb_mode());
        assert_eq!(p.elasticity, 0.5);
        assert_eq!(p.gravitational_constant, DEFAULT_G);
        assert_eq!(p.max_separation_iterations, DEFAULT_MAX_SEPARATION_ITERATIONS);
    }

    #[test]
    fn negative_values_are_accepted() {
        let p = SimParams::from_json(r#"{"gravitationalConstant":-5.0,"elasticity":-1.0}"#).unwrap();
        assert_eq!(p.gravitational_constant, -5.0);
        assert_eq!(p.elasticity, -1.0);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(SimParams::from_json(r#"{"collisionMode":"shatter"}"#).is_err());
    }

    #[test]
    fn json_output_reloads_to_same_params() {
        let mut p = SimParams::default();
        p.set_absorb_mode(true);
        p.gravitational_constant = 42.0;
        assert_eq!(SimParams::from_json(&p.to_json()).unwrap(), p);
    }
}
