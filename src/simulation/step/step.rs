use crate::domain::SimError;
use crate::systems::{accumulate_gravity, integrate, resolve_collisions, CollisionStats};

use super::{PerfTimer, SimulationCore};

pub(super) fn step_simulation(
    sim: &mut SimulationCore,
    dt: f64,
    num_rounds: u32,
) -> Result<(), SimError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::InvalidTimeStep(dt));
    }

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);

    let mut cap_hits = 0u32;
    for _ in 0..num_rounds {
        let stats = step_round(sim, dt, perf_on);
        cap_hits = cap_hits.saturating_add(stats.separation_cap_hits);
    }

    if cap_hits > 0 {
        console_warn!(
            "bounce separation stopped at the {}-iteration cap {} time(s)",
            sim.params.max_separation_iterations,
            cap_hits
        );
    }

    if let Some(t) = step_start {
        sim.perf_stats.step_ms = t.elapsed_ms();
        sim.perf_stats.rounds = num_rounds;
        sim.perf_stats.active_particles = sim.particles.active_count() as u32;
        sim.perf_stats.particle_count = sim.particles.len() as u32;
    }
    Ok(())
}

/// One round: forces, integration, collisions
fn step_round(sim: &mut SimulationCore, dt: f64, perf_on: bool) -> CollisionStats {
    let (particles, active) = sim.particles.pass_view();

    // === FORCE & INTEGRATION PASS ===
    let g = sim.params.gravitational_constant;
    let force_pairs = PerfTimer::measure(perf_on, &mut sim.perf_stats.forces_ms, || {
        let pairs = accumulate_gravity(&mut *particles, active, g);
        integrate(&mut *particles, active, dt);
        pairs
    });

    // === COLLISION PASS ===
    // Uses post-integration positions
    let params = &sim.params;
    let stats = PerfTimer::measure(perf_on, &mut sim.perf_stats.collisions_ms, || {
        resolve_collisions(particles, active, params, dt)
    });
    if perf_on {
        sim.perf_stats.force_pairs = sim.perf_stats.force_pairs.saturating_add(force_pairs);
        sim.perf_stats.add_collisions(&stats);
    }

    if stats.absorptions > 0 {
        sim.particles.mark_active_stale();
    }
    sim.frame += 1;
    stats
}
