//! Uniform gravity.

use super::{ForceContext, ForceGenerator};
use crate::types::{constants, Particle, Vec3};

/// Applies `acceleration * mass` to every particle it is registered with.
#[derive(Debug, Clone, PartialEq)]
pub struct Gravity {
    pub acceleration: Vec3,
}

impl Gravity {
    pub fn new(acceleration: Vec3) -> Self {
        Self { acceleration }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(constants::GRAVITY_VECTOR)
    }
}

impl ForceGenerator for Gravity {
    fn update_force(&mut self, particle: &mut Particle, _ctx: &ForceContext<'_>, _duration: f64) {
        if !particle.has_finite_mass() {
            return;
        }
        particle.add_force(self.acceleration * particle.mass());
    }
}
