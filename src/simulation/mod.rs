//! Simulation - owns the particle store and parameters, orchestrates rounds
//!
//! `SimulationCore` is the host-owned handle: every operation goes through
//! it, so independent simulations never share state.
//!
//! One round is: zero forces -> accumulate gravity -> integrate -> collide.
//! The physics itself lives in `systems/`; this module only sequences it,
//! validates caller input and exposes read-back.

use crate::core::Vec2;
use crate::domain::{ParticleId, ParticleStore, SimError, SimParams};
use crate::domain::particle::Particle;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "query/query.rs"]
mod query;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Flat buffers the host reads once per frame instead of calling a getter
/// per particle
pub(crate) struct RenderBuffers {
    /// `[x, y, radius]` per particle, in slot order
    pub(crate) positions: Vec<f64>,
    pub(crate) colors: Vec<u32>,
}

/// The simulation state
pub struct SimulationCore {
    particles: ParticleStore,
    params: SimParams,

    // State
    frame: u64,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Empty store, id counter 0, default parameters
    pub fn new() -> Self {
        init::create_simulation_core(SimParams::default())
    }

    pub fn with_params(params: SimParams) -> Self {
        init::create_simulation_core(params)
    }

    // === PARAMETERS ===

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn set_g(&mut self, value: f64) {
        settings::set_g(self, value);
    }

    pub fn set_elasticity(&mut self, value: f64) {
        settings::set_elasticity(self, value);
    }

    pub fn set_absorb_mode(&mut self, absorb: bool) {
        settings::set_absorb_mode(self, absorb);
    }

    pub fn set_max_separation_iterations(&mut self, max: u32) {
        settings::set_max_separation_iterations(self, max);
    }

    /// Replace all parameters from JSON. Missing keys take their defaults.
    pub fn load_params_json(&mut self, json: &str) -> Result<(), SimError> {
        settings::load_params_json(self, json)
    }

    pub fn params_json(&self) -> String {
        self.params.to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === COMMANDS ===

    /// Append a particle; its id (and index) is the prior particle count
    #[allow(clippy::too_many_arguments)]
    pub fn add_particle(
        &mut self,
        px: f64,
        py: f64,
        vx: f64,
        vy: f64,
        mass: f64,
        radius: f64,
        color: u32,
    ) -> Result<ParticleId, SimError> {
        commands::add_particle(self, px, py, vx, vy, mass, radius, color)
    }

    /// Apply a scenario bundle: optional parameters plus particles to append.
    /// All-or-nothing.
    pub fn load_scenario_json(&mut self, json: &str) -> Result<usize, SimError> {
        commands::load_scenario_json(self, json)
    }

    /// Advance `num_rounds` rounds of `dt` each
    pub fn step_simulation(&mut self, dt: f64, num_rounds: u32) -> Result<(), SimError> {
        step::step_simulation(self, dt, num_rounds)
    }

    // === QUERIES ===

    /// Store size, inert particles included
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    pub fn active_count(&self) -> usize {
        self.particles.active_count()
    }

    /// Rounds executed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particle(&self, index: usize) -> Result<&Particle, SimError> {
        query::particle_at(self, index)
    }

    pub fn particle_by_id(&self, id: ParticleId) -> Result<&Particle, SimError> {
        query::particle_by_id(self, id)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn position_x(&self, index: usize) -> Result<f64, SimError> {
        query::particle_at(self, index).map(|p| p.position.x)
    }

    pub fn position_y(&self, index: usize) -> Result<f64, SimError> {
        query::particle_at(self, index).map(|p| p.position.y)
    }

    pub fn velocity_x(&self, index: usize) -> Result<f64, SimError> {
        query::particle_at(self, index).map(|p| p.velocity.x)
    }

    pub fn velocity_y(&self, index: usize) -> Result<f64, SimError> {
        query::particle_at(self, index).map(|p| p.velocity.y)
    }

    pub fn mass(&self, index: usize) -> Result<f64, SimError> {
        query::particle_at(self, index).map(|p| p.mass)
    }

    pub fn radius(&self, index: usize) -> Result<f64, SimError> {
        query::particle_at(self, index).map(|p| p.radius)
    }

    pub fn color(&self, index: usize) -> Result<u32, SimError> {
        query::particle_at(self, index).map(|p| p.color)
    }

    pub fn is_inert(&self, index: usize) -> Result<bool, SimError> {
        query::particle_at(self, index).map(|p| p.is_inert())
    }

    pub fn total_mass(&self) -> f64 {
        query::total_mass(self)
    }

    pub fn total_momentum(&self) -> Vec2 {
        query::total_momentum(self)
    }

    /// Currently overlapping active pairs by slot, in pass order
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        query::overlapping_pairs(self)
    }

    // === RENDER EXTRACTION ===

    /// Refresh the flat render buffers; returns the particle count written
    pub fn sync_render_buffers(&mut self) -> usize {
        render_extract::sync_render_buffers(self)
    }

    pub fn render_positions(&self) -> &[f64] {
        &self.render.positions
    }

    pub fn render_colors(&self) -> &[u32] {
        &self.render.colors
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
