use wasm_bindgen::prelude::*;

use crate::domain::SimError;

use super::perf_stats::PerfStats;
use super::SimulationCore;

impl From<SimError> for JsValue {
    fn from(e: SimError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty simulation with default parameters
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    #[wasm_bindgen(js_name = withParamsJson)]
    pub fn with_params_json(json: &str) -> Result<Simulation, JsValue> {
        let mut core = SimulationCore::new();
        core.load_params_json(json)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    // === PARAMETERS ===

    #[wasm_bindgen(js_name = set_G)]
    pub fn set_g(&mut self, value: f64) {
        self.core.set_g(value);
    }

    #[wasm_bindgen(js_name = get_G)]
    pub fn get_g(&self) -> f64 {
        self.core.params().gravitational_constant
    }

    pub fn set_elasticity(&mut self, value: f64) {
        self.core.set_elasticity(value);
    }

    pub fn get_elasticity(&self) -> f64 {
        self.core.params().elasticity
    }

    pub fn set_absorb_mode(&mut self, absorb: bool) {
        self.core.set_absorb_mode(absorb);
    }

    pub fn get_absorb_mode(&self) -> bool {
        self.core.params().absorb_mode()
    }

    pub fn set_max_separation_iterations(&mut self, max: u32) {
        self.core.set_max_separation_iterations(max);
    }

    pub fn load_params_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_params_json(json)?;
        Ok(())
    }

    pub fn get_params_json(&self) -> String {
        self.core.params_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === COMMANDS ===

    /// Append a particle. Returns its index (== id).
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
    ) -> Result<u32, JsValue> {
        let id = self.core.add_particle(px, py, vx, vy, mass, radius, color)?;
        Ok(id.0)
    }

    /// Load a scenario bundle; returns how many particles were added
    pub fn load_scenario_json(&mut self, json: &str) -> Result<usize, JsValue> {
        Ok(self.core.load_scenario_json(json)?)
    }

    /// Run `num_rounds` rounds of force, integration and collisions.
    /// A negative count runs nothing (dt is still checked).
    pub fn step_simulation(&mut self, dt: f64, num_rounds: i32) -> Result<(), JsValue> {
        let rounds = u32::try_from(num_rounds).unwrap_or(0);
        self.core.step_simulation(dt, rounds)?;
        Ok(())
    }

    // === QUERIES ===

    pub fn get_num_particles(&self) -> usize {
        self.core.num_particles()
    }

    pub fn get_active_count(&self) -> usize {
        self.core.active_count()
    }

    pub fn get_position_x(&self, index: i32) -> Result<f64, JsValue> {
        Ok(self.core.position_x(self.index(index)?)?)
    }

    pub fn get_position_y(&self, index: i32) -> Result<f64, JsValue> {
        Ok(self.core.position_y(self.index(index)?)?)
    }

    pub fn get_velocity_x(&self, index: i32) -> Result<f64, JsValue> {
        Ok(self.core.velocity_x(self.index(index)?)?)
    }

    pub fn get_velocity_y(&self, index: i32) -> Result<f64, JsValue> {
        Ok(self.core.velocity_y(self.index(index)?)?)
    }

    pub fn get_mass(&self, index: i32) -> Result<f64, JsValue> {
        Ok(self.core.mass(self.index(index)?)?)
    }

    pub fn get_radius(&self, index: i32) -> Result<f64, JsValue> {
        Ok(self.core.radius(self.index(index)?)?)
    }

    /// Packed 0xRRGGBB
    pub fn get_color(&self, index: i32) -> Result<u32, JsValue> {
        Ok(self.core.color(self.index(index)?)?)
    }

    pub fn is_inert(&self, index: i32) -> Result<bool, JsValue> {
        Ok(self.core.is_inert(self.index(index)?)?)
    }

    pub fn total_mass(&self) -> f64 {
        self.core.total_mass()
    }

    pub fn total_momentum_x(&self) -> f64 {
        self.core.total_momentum().x
    }

    pub fn total_momentum_y(&self) -> f64 {
        self.core.total_momentum().y
    }

    // === RENDER EXTRACTION API ===

    /// Refresh render buffers; call once per frame before reading pointers
    pub fn sync_render_buffers(&mut self) -> usize {
        self.core.sync_render_buffers()
    }

    /// Pointer to `[x, y, radius]` f64 triples (for JS rendering)
    pub fn render_positions_ptr(&self) -> *const f64 {
        self.core.render_positions().as_ptr()
    }

    /// Number of f64 elements in the position buffer
    pub fn render_positions_len(&self) -> usize {
        self.core.render_positions().len()
    }

    /// Pointer to packed 0xRRGGBB colors
    pub fn render_colors_ptr(&self) -> *const u32 {
        self.core.render_colors().as_ptr()
    }

    pub fn render_colors_len(&self) -> usize {
        self.core.render_colors().len()
    }
}

impl Simulation {
    /// JS indices arrive as signed numbers; negatives are rejected here
    fn index(&self, index: i32) -> Result<usize, SimError> {
        usize::try_from(index).map_err(|_| SimError::IndexOutOfBounds {
            index: index as i64,
            len: self.core.num_particles(),
        })
    }

    /// Native access to the wrapped core (tests, embedding hosts)
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
