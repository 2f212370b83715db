use std::collections::HashMap;

use crate::core::Vec2;

use super::particle::{Particle, ParticleId};

/// Ordered particle storage.
///
/// Slots never move: a particle's slot equals its creation index, and the
/// store only ever grows. Inert particles stay in place. A dense list of
/// active slots lets pairwise passes skip them without rescanning.
pub struct ParticleStore {
    particles: Vec<Particle>,
    next_id: u32,
    slot_by_id: HashMap<ParticleId, usize>,
    /// Ascending slots of active particles
    active: Vec<usize>,
    active_stale: bool,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            next_id: 0,
            slot_by_id: HashMap::new(),
            active: Vec::new(),
            active_stale: false,
        }
    }

    /// Append a particle, assigning the next id. Returns the id.
    pub fn push(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        mass: f64,
        radius: f64,
        color: u32,
    ) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;

        let slot = self.particles.len();
        let particle = Particle::new(id, position, velocity, mass, radius, color);
        if particle.is_active() {
            self.active.push(slot);
        }
        self.particles.push(particle);
        self.slot_by_id.insert(id, slot);
        id
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Particle> {
        self.particles.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Particle> {
        self.particles.get_mut(slot)
    }

    pub fn slot_of(&self, id: ParticleId) -> Option<usize> {
        self.slot_by_id.get(&id).copied()
    }

    pub fn by_id(&self, id: ParticleId) -> Option<&Particle> {
        self.slot_of(id).and_then(|slot| self.particles.get(slot))
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_active()).count()
    }

    /// Record that some particles went inert, so the active list needs a rebuild
    pub fn mark_active_stale(&mut self) {
        self.active_stale = true;
    }

    /// Rebuild the active slot list if a pass deactivated particles
    pub fn refresh_active(&mut self) {
        if !self.active_stale {
            return;
        }
        self.active.clear();
        self.active.extend(
            self.particles
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_active())
                .map(|(slot, _)| slot),
        );
        self.active_stale = false;
    }

    /// Split borrow for a pairwise pass: mutable particles plus the
    /// ascending active slot list.
    pub fn pass_view(&mut self) -> (&mut [Particle], &[usize]) {
        self.refresh_active();
        (self.particles.as_mut_slice(), self.active.as_slice())
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable references to two distinct slots, `i < j`
#[inline]
pub fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < j);
    let (head, tail) = particles.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
