use crate::domain::{SimError, SimParams};

use super::SimulationCore;

// Parameter setters take effect on the next round and are not range-checked.

pub(super) fn set_g(sim: &mut SimulationCore, value: f64) {
    sim.params.gravitational_constant = value;
}

pub(super) fn set_elasticity(sim: &mut SimulationCore, value: f64) {
    sim.params.elasticity = value;
}

pub(super) fn set_absorb_mode(sim: &mut SimulationCore, absorb: bool) {
    sim.params.set_absorb_mode(absorb);
}

pub(super) fn set_max_separation_iterations(sim: &mut SimulationCore, max: u32) {
    sim.params.max_separation_iterations = max;
}

pub(super) fn load_params_json(sim: &mut SimulationCore, json: &str) -> Result<(), SimError> {
    let params = SimParams::from_json(json)?;
    console_log!(
        "params loaded: G={} elasticity={} mode={:?}",
        params.gravitational_constant,
        params.elasticity,
        params.collision_mode
    );
    sim.params = params;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}
