use crate::core::color::blend_weighted;
use crate::domain::particle::{Particle, ParticleId};

/// Perfectly inelastic merge of an overlapping pair.
///
/// The heavier particle survives (ties keep `p1`) and takes the
/// mass-weighted position and color, the momentum-weighted velocity, the
/// combined mass and `radius = sqrt(mass)`. The other particle goes inert in
/// its own slot. Returns the id of the absorbed particle.
pub fn absorb(p1: &mut Particle, p2: &mut Particle) -> ParticleId {
    let (survivor, absorbed) = if p1.mass < p2.mass { (p2, p1) } else { (p1, p2) };

    let total_mass = survivor.mass + absorbed.mass;
    let center_of_mass = survivor.position * survivor.mass + absorbed.position * absorbed.mass;
    let net_momentum = survivor.velocity * survivor.mass + absorbed.velocity * absorbed.mass;

    survivor.position = center_of_mass / total_mass;
    survivor.velocity = net_momentum / total_mass;
    survivor.color = blend_weighted(survivor.color, survivor.mass, absorbed.color, absorbed.mass);
    survivor.mass += absorbed.mass;
    survivor.radius = survivor.mass.sqrt();

    absorbed.make_inert();
    absorbed.id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;

    fn body(id: u32, x: f64, vx: f64, mass: f64, color: u32) -> Particle {
        Particle::new(ParticleId(id), Vec2::new(x, 0.0), Vec2::new(vx, 0.0), mass, mass.sqrt(), color)
    }

    #[test]
    fn heavier_second_particle_survives_in_place() {
        let mut a = body(0, 0.0, 2.0, 1.0, 0x000000);
        let mut b = body(1, 1.0, 0.0, 3.0, 0xFFFFFF);
        let absorbed = absorb(&mut a, &mut b);

        assert_eq!(absorbed, ParticleId(0));
        assert!(a.is_inert());
        assert_eq!(a.id, ParticleId(0));
        assert_eq!(b.id, ParticleId(1));
        assert_eq!(b.mass, 4.0);
        assert_eq!(b.radius, 2.0);
        assert!((b.position.x - 0.75).abs() < 1e-12);
        assert!((b.velocity.x - 0.5).abs() < 1e-12);
        // 255 * 3 / 4 = 191.25 -> 191
        assert_eq!(b.color, 0xBF_BF_BF);
    }

    #[test]
    fn tie_keeps_first() {
        let mut a = body(0, -1.0, 1.0, 10.0, 0xFF0000);
        let mut b = body(1, 1.0, -1.0, 10.0, 0x0000FF);
        absorb(&mut a, &mut b);

        assert!(a.is_active());
        assert!(b.is_inert());
        assert_eq!(a.position, Vec2::zero());
        assert_eq!(a.velocity, Vec2::zero());
        assert_eq!(a.mass, 20.0);
        assert_eq!(a.radius, 20f64.sqrt());
        assert_eq!(a.color, 0x7F_00_7F);
    }

    #[test]
    fn absorbed_keeps_stale_kinematics() {
        let mut a = body(0, 0.0, 0.0, 5.0, 0x123456);
        let mut b = body(1, 0.5, 3.0, 1.0, 0x654321);
        absorb(&mut a, &mut b);
        assert_eq!(b.position, Vec2::new(0.5, 0.0));
        assert_eq!(b.velocity, Vec2::new(3.0, 0.0));
        assert_eq!(b.color, 0x654321);
        assert_eq!((b.mass, b.radius), (0.0, 0.0));
    }

    #[test]
    fn mass_and_momentum_conserved() {
        let mut a = body(0, 0.0, 1.5, 2.5, 0);
        let mut b = body(1, 0.2, -4.0, 6.5, 0);
        let m_before = a.mass + b.mass;
        let p_before = a.momentum() + b.momentum();
        absorb(&mut a, &mut b);
        assert_eq!(a.mass + b.mass, m_before);
        assert!(((a.momentum() + b.momentum()) - p_before).length() < 1e-9);
    }
}
