use std::fmt;

use super::particle::ParticleId;

/// Failures reported by the engine API.
///
/// Physics itself never fails: numeric degeneracies have defined fallbacks.
/// These cover caller contract violations and bad configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// Particle index was not below the current store size
    IndexOutOfBounds { index: i64, len: usize },
    UnknownParticle(ParticleId),
    /// `dt` must be finite and strictly positive
    InvalidTimeStep(f64),
    InvalidParticle(String),
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::IndexOutOfBounds { index, len } => {
                write!(f, "particle index {} out of bounds (count {})", index, len)
            }
            SimError::UnknownParticle(id) => write!(f, "unknown particle id {}", id.0),
            SimError::InvalidTimeStep(dt) => {
                write!(f, "time step must be finite and > 0, got {}", dt)
            }
            SimError::InvalidParticle(reason) => write!(f, "invalid particle: {}", reason),
            SimError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for SimError {}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::InvalidConfig(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = SimError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(e.to_string(), "particle index 7 out of bounds (count 3)");
        assert!(SimError::InvalidTimeStep(-1.0).to_string().contains("-1"));
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: SimError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }
}
