use std::fs;

use gravwell_engine::{Simulation, SimulationCore};

#[test]
fn scenario_smoke_loads_and_merges() {
    let json = fs::read_to_string("scenarios/two_body.json")
        .expect("scenarios/two_body.json should exist");

    let mut sim = SimulationCore::new();
    assert_eq!(sim.load_scenario_json(&json).expect("scenario should parse"), 2);
    assert!(sim.params().absorb_mode());

    let mass_before = sim.total_mass();
    for _ in 0..1_000 {
        sim.step_simulation(0.01, 1).unwrap();
        if sim.active_count() == 1 {
            break;
        }
    }

    assert_eq!(sim.active_count(), 1);
    assert_eq!(sim.num_particles(), 2);
    assert_eq!(sim.total_mass(), mass_before);
    assert!(sim.position_x(0).unwrap().abs() < 1e-9);
}

#[test]
fn facade_reads_match_core() {
    let mut sim = Simulation::new();
    sim.set_g(200.0);
    sim.set_elasticity(1.0);
    sim.set_absorb_mode(false);

    assert_eq!(sim.add_particle(-5.0, 0.0, 0.0, 0.0, 10.0, 1.0, 0xFF0000).unwrap(), 0);
    assert_eq!(sim.add_particle(5.0, 0.0, 0.0, 0.0, 10.0, 1.0, 0x0000FF).unwrap(), 1);
    assert_eq!(sim.get_num_particles(), 2);

    sim.step_simulation(0.01, 20).unwrap();

    assert_eq!(sim.get_position_x(0).unwrap(), sim.core().position_x(0).unwrap());
    assert!(sim.get_position_x(0).unwrap() > -5.0);
    assert_eq!(sim.get_mass(1).unwrap(), 10.0);
    assert_eq!(sim.get_radius(1).unwrap(), 1.0);
    assert_eq!(sim.get_color(1).unwrap(), 0x0000FF);
    assert_eq!(sim.core().frame(), 20);

    assert_eq!(sim.sync_render_buffers(), 2);
    assert_eq!(sim.render_positions_len(), 6);
    assert_eq!(sim.render_colors_len(), 2);
    assert!(!sim.render_positions_ptr().is_null());
}

#[test]
fn negative_round_count_runs_nothing() {
    let mut sim = Simulation::new();
    sim.add_particle(0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0xFFFFFF).unwrap();

    sim.step_simulation(0.01, -1).unwrap();
    sim.step_simulation(0.01, i32::MIN).unwrap();

    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.get_position_x(0).unwrap(), 0.0);

    sim.step_simulation(0.01, 2).unwrap();
    assert_eq!(sim.frame(), 2);
}
