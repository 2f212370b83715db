//! Browser-side checks of the JS-facing API. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use gravwell_engine::Simulation;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn out_of_range_index_is_a_js_error() {
    let mut sim = Simulation::new();
    sim.add_particle(0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0xFFFFFF).unwrap();
    assert!(sim.get_position_x(1).is_err());
    assert!(sim.get_position_x(-1).is_err());
    assert!(sim.get_position_x(0).is_ok());
}

#[wasm_bindgen_test]
fn bad_time_step_is_a_js_error() {
    let mut sim = Simulation::new();
    assert!(sim.step_simulation(0.0, 1).is_err());
    assert!(sim.step_simulation(0.01, 1).is_ok());
}

#[wasm_bindgen_test]
fn params_json_round_trips_through_js() {
    let sim = Simulation::with_params_json(r#"{"collisionMode":"absorb"}"#).unwrap();
    assert!(sim.get_absorb_mode());
    assert!(Simulation::with_params_json("nope").is_err());
}
