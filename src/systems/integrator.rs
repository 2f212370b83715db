use crate::domain::particle::Particle;

/// Semi-implicit (symplectic) Euler: velocity first, then position with the
/// updated velocity. Only the listed active slots move.
pub fn integrate(particles: &mut [Particle], active: &[usize], dt: f64) {
    for &slot in active {
        let p = &mut particles[slot];
        if !p.is_active() {
            continue;
        }
        p.velocity += p.net_force * (dt / p.mass);
        p.position += p.velocity * dt;
    }
}
