//! Buoyancy for a cube floating on a flat liquid surface.
//!
//! ```text
//!        ┌───┐  y + side/2
//!  ~~~~~~│~~~│~~~~~~~ liquid_height
//!        └───┘  y - side/2
//!
//! fraction = clamp((liquid_height - (y - side/2)) / side, 0, 1)
//! F_y      = ρ · V · g · fraction
//! ```
//!
//! Fully out of the liquid the cube feels nothing; fully under it feels the
//! whole displacement `ρ·V·g`.

use super::{ForceContext, ForceGenerator};
use crate::types::{constants, Particle, Vec3};

/// Liquid-displacement lift on a cube of edge `side`.
#[derive(Debug, Clone, PartialEq)]
pub struct Buoyancy {
    /// Cube edge length; the object spans `y ± side/2`.
    pub side: f64,
    /// Fully submerged volume.
    pub volume: f64,
    /// Height of the liquid surface.
    pub liquid_height: f64,
    /// Liquid density (water ≈ 1000).
    pub liquid_density: f64,
    /// Magnitude of gravity the displacement works against.
    pub gravity: f64,
}

impl Buoyancy {
    pub fn new(side: f64, volume: f64, liquid_height: f64, liquid_density: f64) -> Self {
        debug_assert!(
            side > 0.0 && side.is_finite(),
            "buoyancy cube side must be positive and finite, got {}",
            side
        );
        Self {
            side,
            volume,
            liquid_height,
            liquid_density,
            gravity: constants::GRAVITY,
        }
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Submerged share of the cube at height `y`, in `[0, 1]`.
    pub fn submerged_fraction(&self, y: f64) -> f64 {
        let bottom = y - self.side * 0.5;
        ((self.liquid_height - bottom) / self.side).clamp(0.0, 1.0)
    }

    /// Upward force at full submersion.
    pub fn max_force(&self) -> f64 {
        self.liquid_density * self.volume * self.gravity
    }
}

impl ForceGenerator for Buoyancy {
    fn update_force(&mut self, particle: &mut Particle, _ctx: &ForceContext<'_>, _duration: f64) {
        let fraction = self.submerged_fraction(particle.position.y);
        if fraction <= 0.0 {
            return;
        }
        particle.add_force(Vec3::UP * (self.max_force() * fraction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forces::test_support::apply_alone;

    fn water() -> Buoyancy {
        Buoyancy::new(1.0, 1.0, 0.0, 1000.0)
    }

    #[test]
    fn test_out_of_liquid_is_zero() {
        let mut b = water();
        let mut p = Particle::new(Vec3::new(0.0, 5.0, 0.0), 10.0);

        assert_eq!(apply_alone(&mut b, &mut p, 0.016), Vec3::ZERO);
    }

    #[test]
    fn test_fully_submerged_is_full_displacement() {
        let mut b = water();
        let mut p = Particle::new(Vec3::new(0.0, -3.0, 0.0), 10.0);

        let force = apply_alone(&mut b, &mut p, 0.016);

        let expected = 1000.0 * 1.0 * constants::GRAVITY;
        assert!((force.y - expected).abs() < 1e-9, "expected {}, got {}", expected, force.y);
        assert!(force.y > 0.0, "buoyancy must oppose gravity");
    }

    #[test]
    fn test_half_submerged_is_half_force() {
        let b = water();
        assert!((b.submerged_fraction(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_force_is_monotonic_in_depth() {
        let mut b = water();
        let mut last = -1.0;

        for step in 0..=40 {
            let y = 1.0 - step as f64 * 0.05;
            let mut p = Particle::new(Vec3::new(0.0, y, 0.0), 10.0);
            let force = apply_alone(&mut b, &mut p, 0.016).y;
            assert!(force >= last, "force decreased at y={}: {} < {}", y, force, last);
            last = force;
        }
    }

    #[test]
    fn test_zero_density_adds_nothing() {
        let mut b = Buoyancy::new(1.0, 1.0, 0.0, 0.0);
        let mut p = Particle::new(Vec3::new(0.0, -2.0, 0.0), 10.0);

        assert_eq!(apply_alone(&mut b, &mut p, 0.016), Vec3::ZERO);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cube side must be positive")]
    fn test_zero_side_is_rejected() {
        let _ = Buoyancy::new(0.0, 1.0, 0.0, 1000.0);
    }
}
