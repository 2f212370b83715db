use crate::core::Vec2;
use crate::domain::particle::Particle;
use crate::domain::{ParticleId, SimError};
use crate::systems::collision::overlapping_pairs as find_overlaps;

use super::SimulationCore;

pub(super) fn particle_at(sim: &SimulationCore, index: usize) -> Result<&Particle, SimError> {
    sim.particles.get(index).ok_or(SimError::IndexOutOfBounds {
        index: index as i64,
        len: sim.particles.len(),
    })
}

pub(super) fn particle_by_id(sim: &SimulationCore, id: ParticleId) -> Result<&Particle, SimError> {
    sim.particles.by_id(id).ok_or(SimError::UnknownParticle(id))
}

/// Inert particles carry zero mass, so summing everything is exact
pub(super) fn total_mass(sim: &SimulationCore) -> f64 {
    sim.particles.iter().map(|p| p.mass).sum()
}

pub(super) fn total_momentum(sim: &SimulationCore) -> Vec2 {
    sim.particles
        .iter()
        .filter(|p| p.is_active())
        .fold(Vec2::zero(), |acc, p| acc + p.momentum())
}

pub(super) fn overlapping_pairs(sim: &SimulationCore) -> Vec<(usize, usize)> {
    let active: Vec<usize> = sim
        .particles
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_active())
        .map(|(slot, _)| slot)
        .collect();
    find_overlaps(sim.particles.as_slice(), &active)
}
