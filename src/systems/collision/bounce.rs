use crate::core::Vec2;
use crate::domain::particle::Particle;

/// Result of resolving one bounce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BounceOutcome {
    /// Positional correction steps taken
    pub iterations: u32,
    /// Correction stopped at the iteration cap while still overlapping
    pub capped: bool,
}

/// Impulse response along the collision normal, followed by positional
/// correction.
///
/// The normal points from `p2` to `p1`; coincident centers use +x. The
/// impulse magnitude is `((v1 - v2) · n) m1 m2 (1 + e) / (m1 + m2)`.
/// Afterwards both particles keep stepping along their new velocities by
/// `dt` until they no longer overlap, for at most `max_iterations` steps.
pub fn bounce(
    p1: &mut Particle,
    p2: &mut Particle,
    elasticity: f64,
    dt: f64,
    max_iterations: u32,
) -> BounceOutcome {
    let direction = (p1.position - p2.position)
        .try_normalize()
        .unwrap_or(Vec2::UNIT_X);
    let relative_velocity = p1.velocity - p2.velocity;

    let mut strength = relative_velocity.dot(direction);
    strength *= p1.mass * p2.mass * (1.0 + elasticity);
    strength /= p1.mass + p2.mass;

    let impulse = direction * strength;
    p1.velocity -= impulse / p1.mass;
    p2.velocity += impulse / p2.mass;

    separate(p1, p2, dt, max_iterations)
}

/// Advance both particles along their velocities until they stop overlapping.
// NOTE: with three or more mutually touching particles this can push a
// particle into a neighbour resolved earlier in the same pass.
fn separate(p1: &mut Particle, p2: &mut Particle, dt: f64, max_iterations: u32) -> BounceOutcome {
    let mut iterations = 0u32;
    while p1.overlaps(p2) {
        if iterations >= max_iterations {
            return BounceOutcome { iterations, capped: true };
        }
        p1.position += p1.velocity * dt;
        p2.position += p2.velocity * dt;
        iterations += 1;
    }
    BounceOutcome { iterations, capped: false }
}
