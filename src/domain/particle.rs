use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Creation-order identifier, unique for the lifetime of a simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

/// Whether a particle still takes part in physics.
///
/// `Inert` is terminal: absorbed particles keep their slot and id but are
/// skipped by every pass from then on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleStatus {
    Active,
    Inert,
}

/// A circular point mass
#[derive(Clone, Debug)]
pub struct Particle {
    // === Kinematics ===
    pub position: Vec2,
    pub velocity: Vec2,
    /// Force accumulator, only meaningful inside a force pass
    pub net_force: Vec2,

    // === Physical properties ===
    pub mass: f64,
    /// Collision radius; the absorb policy keeps `radius = sqrt(mass)`
    pub radius: f64,

    /// Packed 0xRRGGBB
    pub color: u32,
    pub id: ParticleId,
    pub status: ParticleStatus,
}

impl Particle {
    /// Create a particle. Mass 0 is the inert sentinel, so such a
    /// particle starts out inert.
    pub fn new(
        id: ParticleId,
        position: Vec2,
        velocity: Vec2,
        mass: f64,
        radius: f64,
        color: u32,
    ) -> Self {
        let status = if mass == 0.0 {
            ParticleStatus::Inert
        } else {
            ParticleStatus::Active
        };

        Self {
            position,
            velocity,
            net_force: Vec2::zero(),
            mass,
            radius,
            color,
            id,
            status,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ParticleStatus::Active
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        self.status == ParticleStatus::Inert
    }

    /// Move to the terminal inert state. Position, velocity and color are
    /// left as they were.
    pub fn make_inert(&mut self) {
        self.mass = 0.0;
        self.radius = 0.0;
        self.net_force = Vec2::zero();
        self.status = ParticleStatus::Inert;
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// True when the two discs overlap (strictly closer than the radius sum)
    #[inline]
    pub fn overlaps(&self, other: &Particle) -> bool {
        (self.position - other.position).length() < self.radius + other.radius
    }
}
