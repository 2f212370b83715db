//! Domain model: particles, their storage, parameters and scenarios

pub mod error;
pub mod params;
pub mod particle;
pub mod scenario;
pub mod store;

pub use error::SimError;
pub use params::{CollisionMode, SimParams};
pub use particle::{Particle, ParticleId, ParticleStatus};
pub use scenario::{ParticleSpec, Scenario};
pub use store::ParticleStore;
