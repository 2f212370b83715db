//! Physics systems, run in this order every round:
//! 1. `forces`     - pairwise gravity into each particle's accumulator
//! 2. `integrator` - semi-implicit Euler
//! 3. `collision`  - pairwise detection and bounce/absorb response

pub mod collision;
pub mod forces;
pub mod integrator;

pub use collision::{resolve_collisions, CollisionStats};
pub use forces::accumulate_gravity;
pub use integrator::integrate;
