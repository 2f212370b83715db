use wasm_bindgen::prelude::*;

use crate::systems::CollisionStats;

/// Snapshot of the last `step_simulation` call (all rounds summed)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) collisions_ms: f64,
    pub(super) rounds: u32,
    pub(super) force_pairs: u32,
    pub(super) collision_pairs: u32,
    pub(super) collisions: u32,
    pub(super) absorptions: u32,
    pub(super) separation_iterations: u32,
    pub(super) separation_cap_hits: u32,
    pub(super) active_particles: u32,
    pub(super) particle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn add_collisions(&mut self, stats: &CollisionStats) {
        self.collision_pairs = self.collision_pairs.saturating_add(stats.pairs_checked);
        self.collisions = self.collisions.saturating_add(stats.collisions);
        self.absorptions = self.absorptions.saturating_add(stats.absorptions);
        self.separation_iterations = self
            .separation_iterations
            .saturating_add(stats.separation_iterations);
        self.separation_cap_hits = self.separation_cap_hits.saturating_add(stats.separation_cap_hits);
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn rounds(&self) -> u32 { self.rounds }
    #[wasm_bindgen(getter)]
    pub fn force_pairs(&self) -> u32 { self.force_pairs }
    #[wasm_bindgen(getter)]
    pub fn collision_pairs(&self) -> u32 { self.collision_pairs }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn absorptions(&self) -> u32 { self.absorptions }
    #[wasm_bindgen(getter)]
    pub fn separation_iterations(&self) -> u32 { self.separation_iterations }
    #[wasm_bindgen(getter)]
    pub fn separation_cap_hits(&self) -> u32 { self.separation_cap_hits }
    #[wasm_bindgen(getter)]
    pub fn active_particles(&self) -> u32 { self.active_particles }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
