//! Pairwise Newtonian gravity
//!
//! Brute-force O(n²) over active pairs in ascending `(i, j)` order. Keeping
//! this order fixed keeps floating-point summation, and therefore whole runs,
//! reproducible.

use crate::core::Vec2;
use crate::domain::particle::Particle;
use crate::domain::store::pair_mut;

/// Reset every accumulator, then add `G m1 m2 / d²` along each center line.
///
/// Pairs that overlap exert no force (collision response owns them), and
/// pairs with coincident centers are skipped because the direction is
/// undefined. Returns the number of pairs examined.
pub fn accumulate_gravity(particles: &mut [Particle], active: &[usize], g: f64) -> u32 {
    for p in particles.iter_mut() {
        p.net_force = Vec2::zero();
    }

    let mut pairs = 0u32;
    for (a, &i) in active.iter().enumerate() {
        for &j in &active[a + 1..] {
            pairs += 1;
            let (p1, p2) = pair_mut(particles, i, j);

            let diff = p1.position - p2.position;
            if diff.length() < p1.radius + p2.radius {
                continue;
            }
            let Some(direction) = diff.try_normalize() else {
                continue;
            };

            let magnitude = g * p1.mass * p2.mass / diff.length_squared();
            let force = direction * magnitude;
            p1.net_force -= force;
            p2.net_force += force;
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParticleId;

    fn at(id: u32, x: f64, y: f64, mass: f64, radius: f64) -> Particle {
        Particle::new(ParticleId(id), Vec2::new(x, y), Vec2::zero(), mass, radius, 0)
    }

    #[test]
    fn equal_and_opposite() {
        let mut ps = vec![at(0, -5.0, 0.0, 10.0, 1.0), at(1, 5.0, 0.0, 10.0, 1.0)];
        let pairs = accumulate_gravity(&mut ps, &[0, 1], 200.0);
        assert_eq!(pairs, 1);
        // 200 * 10 * 10 / 100 = 200, p1 pulled toward +x
        assert!((ps[0].net_force.x - 200.0).abs() < 1e-9);
        assert!((ps[1].net_force.x + 200.0).abs() < 1e-9);
        assert_eq!(ps[0].net_force.y, 0.0);
    }

    #[test]
    fn overlapping_pair_exerts_nothing() {
        let mut ps = vec![at(0, 0.0, 0.0, 10.0, 1.0), at(1, 1.5, 0.0, 10.0, 1.0)];
        accumulate_gravity(&mut ps, &[0, 1], 200.0);
        assert_eq!(ps[0].net_force, Vec2::zero());
        assert_eq!(ps[1].net_force, Vec2::zero());
    }

    #[test]
    fn coincident_point_masses_are_skipped() {
        let mut ps = vec![at(0, 2.0, 2.0, 1.0, 0.0), at(1, 2.0, 2.0, 1.0, 0.0)];
        accumulate_gravity(&mut ps, &[0, 1], 200.0);
        assert!(ps[0].net_force.is_finite());
        assert_eq!(ps[0].net_force, Vec2::zero());
    }

    #[test]
    fn stale_forces_are_cleared_and_inactive_slots_ignored() {
        let mut ps = vec![
            at(0, 0.0, 0.0, 1.0, 0.1),
            at(1, 3.0, 0.0, 0.0, 0.0),
            at(2, 0.0, 4.0, 1.0, 0.1),
        ];
        ps[1].net_force = Vec2::new(9.0, 9.0);
        let pairs = accumulate_gravity(&mut ps, &[0, 2], 1.0);
        assert_eq!(pairs, 1);
        assert_eq!(ps[1].net_force, Vec2::zero());
        assert_eq!(ps[0].net_force.x, 0.0);
        assert!((ps[0].net_force.y - 1.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn superposition_of_three_bodies() {
        let mut ps = vec![
            at(0, -1.0, 0.0, 1.0, 0.1),
            at(1, 0.0, 0.0, 1.0, 0.1),
            at(2, 1.0, 0.0, 1.0, 0.1),
        ];
        accumulate_gravity(&mut ps, &[0, 1, 2], 1.0);
        // Middle body is pulled equally both ways
        assert!(ps[1].net_force.x.abs() < 1e-12);
        let total = ps[0].net_force + ps[1].net_force + ps[2].net_force;
        assert!(total.length() < 1e-12);
    }
}
