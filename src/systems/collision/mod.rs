//! Collision System - pairwise detection and response
//!
//! Every step, after integration, all active pairs are scanned again in
//! `(i, j)` order and each overlapping pair is resolved on its own:
//! - Bounce: impulse along the normal, then positional separation
//! - Absorb: heavier particle merges the lighter one, which goes inert
//!
//! There is no simultaneous multi-body solve. A particle touching several
//! neighbours is resolved against each of them in turn.

mod absorb;
mod bounce;
mod detection;

pub use absorb::absorb;
pub use bounce::{bounce, BounceOutcome};
pub use detection::{is_colliding, overlapping_pairs};

use crate::domain::params::{CollisionMode, SimParams};
use crate::domain::particle::Particle;
use crate::domain::store::pair_mut;

/// Counters from one collision pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_checked: u32,
    pub collisions: u32,
    pub absorptions: u32,
    pub separation_iterations: u32,
    pub separation_cap_hits: u32,
}

/// Resolve every overlapping active pair with the configured policy.
///
/// `active` is the slot list from before the pass; particles absorbed during
/// the pass are skipped when reached. When slot `i` itself is absorbed, the
/// rest of its row is abandoned.
pub fn resolve_collisions(
    particles: &mut [Particle],
    active: &[usize],
    params: &SimParams,
    dt: f64,
) -> CollisionStats {
    let mut stats = CollisionStats::default();

    for (a, &i) in active.iter().enumerate() {
        for &j in &active[a + 1..] {
            if !particles[i].is_active() {
                break;
            }
            if !particles[j].is_active() {
                continue;
            }

            stats.pairs_checked += 1;
            let (p1, p2) = pair_mut(particles, i, j);
            if !p1.overlaps(p2) {
                continue;
            }
            stats.collisions += 1;

            match params.collision_mode {
                CollisionMode::Bounce => {
                    let outcome = bounce(
                        p1,
                        p2,
                        params.elasticity,
                        dt,
                        params.max_separation_iterations,
                    );
                    stats.separation_iterations =
                        stats.separation_iterations.saturating_add(outcome.iterations);
                    if outcome.capped {
                        stats.separation_cap_hits += 1;
                    }
                }
                CollisionMode::Absorb => {
                    absorb(p1, p2);
                    stats.absorptions += 1;
                }
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::ParticleId;

    fn disc(id: u32, x: f64, vx: f64, mass: f64) -> Particle {
        Particle::new(ParticleId(id), Vec2::new(x, 0.0), Vec2::new(vx, 0.0), mass, 1.0, 0xFFFFFF)
    }

    fn absorb_params() -> SimParams {
        let mut p = SimParams::default();
        p.set_absorb_mode(true);
        p
    }

    #[test]
    fn chain_absorption_in_one_pass() {
        // 0 and 1 overlap, survivor then overlaps 2
        let mut ps = vec![disc(0, 0.0, 0.0, 4.0), disc(1, 1.0, 0.0, 1.0), disc(2, 2.2, 0.0, 1.0)];
        let stats = resolve_collisions(&mut ps, &[0, 1, 2], &absorb_params(), 0.01);

        assert_eq!(stats.absorptions, 2);
        assert!(ps[0].is_active());
        assert!(ps[1].is_inert());
        assert!(ps[2].is_inert());
        assert_eq!(ps[0].mass, 6.0);
    }

    #[test]
    fn absorbed_row_owner_stops_its_scan() {
        // Slot 0 is lighter and gets absorbed by slot 1. Its stale position
        // still overlaps slot 2, but the row is abandoned, so slot 2 is only
        // ever matched against the survivor.
        let mut ps = vec![disc(0, 0.0, 0.0, 1.0), disc(1, 1.0, 0.0, 4.0), disc(2, -0.5, 0.0, 1.0)];
        let stats = resolve_collisions(&mut ps, &[0, 1, 2], &absorb_params(), 0.01);

        assert!(ps[0].is_inert());
        assert!(ps[1].is_active());
        assert!(ps[2].is_inert());
        // Survivor at 0.8 (radius sqrt 5) reaches slot 2 in its own row
        assert_eq!(ps[1].mass, 6.0);
        assert_eq!(ps[1].mass + ps[0].mass + ps[2].mass, 6.0);
        assert_eq!(stats.pairs_checked, 2);
        assert_eq!(stats.collisions, 2);
        assert_eq!(stats.absorptions, 2);
    }

    #[test]
    fn bounce_pass_separates_pair() {
        let mut ps = vec![disc(0, -0.8, 1.0, 2.0), disc(1, 0.8, -1.0, 2.0)];
        let stats = resolve_collisions(&mut ps, &[0, 1], &SimParams::default(), 0.01);
        assert_eq!(stats.collisions, 1);
        assert_eq!(stats.separation_cap_hits, 0);
        assert!(!ps[0].overlaps(&ps[1]));
        assert!(ps[0].velocity.x < 0.0 && ps[1].velocity.x > 0.0);
    }

    #[test]
    fn inert_slots_in_active_list_are_skipped() {
        let mut ps = vec![disc(0, 0.0, 0.0, 1.0), disc(1, 0.5, 0.0, 1.0)];
        ps[1].make_inert();
        let stats = resolve_collisions(&mut ps, &[0, 1], &absorb_params(), 0.01);
        assert_eq!(stats, CollisionStats::default());
        assert_eq!(ps[0].mass, 1.0);
    }
}
