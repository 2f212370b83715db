use crate::domain::particle::Particle;

/// Two active discs collide when their centers are strictly closer than the
/// sum of their radii.
#[inline]
pub fn is_colliding(p1: &Particle, p2: &Particle) -> bool {
    p1.is_active() && p2.is_active() && p1.overlaps(p2)
}

/// All currently overlapping active pairs, in pass order `(i, j)`, `i < j`.
///
/// Read-only snapshot; resolution happens pair by pair in the collision pass,
/// so this may list pairs that an earlier resolution would separate.
pub fn overlapping_pairs(particles: &[Particle], active: &[usize]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (a, &i) in active.iter().enumerate() {
        for &j in &active[a + 1..] {
            if is_colliding(&particles[i], &particles[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
