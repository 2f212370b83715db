use crate::core::Vec2;
use crate::domain::scenario::{validate_particle, Scenario};
use crate::domain::{ParticleId, SimError};

use super::SimulationCore;

#[allow(clippy::too_many_arguments)]
pub(super) fn add_particle(
    sim: &mut SimulationCore,
    px: f64,
    py: f64,
    vx: f64,
    vy: f64,
    mass: f64,
    radius: f64,
    color: u32,
) -> Result<ParticleId, SimError> {
    validate_particle([px, py], [vx, vy], mass, radius)?;
    Ok(sim.particles.push(
        Vec2::new(px, py),
        Vec2::new(vx, vy),
        mass,
        radius,
        color & 0xFF_FF_FF,
    ))
}

/// Validate everything first so a bad entry leaves the simulation untouched
pub(super) fn load_scenario_json(sim: &mut SimulationCore, json: &str) -> Result<usize, SimError> {
    let scenario = Scenario::from_json(json)?;

    for (i, entry) in scenario.particles.iter().enumerate() {
        validate_particle(entry.position, entry.velocity, entry.mass, entry.radius()).map_err(
            |e| SimError::InvalidConfig(format!("particle {}: {}", i, e)),
        )?;
    }

    if let Some(params) = scenario.params {
        sim.params = params;
    }
    for entry in scenario.particles.iter() {
        sim.particles.push(
            Vec2::new(entry.position[0], entry.position[1]),
            Vec2::new(entry.velocity[0], entry.velocity[1]),
            entry.mass,
            entry.radius(),
            entry.color & 0xFF_FF_FF,
        );
    }

    console_log!(
        "scenario loaded: {} particles, {} total",
        scenario.particles.len(),
        sim.particles.len()
    );
    Ok(scenario.particles.len())
}
