//! Core types for the force-generation core.
//!
//! Units follow the demos rather than strict SI: positions are in "game
//! units", durations in seconds, masses in kilograms. The atmospheric model
//! converts game altitude to meters through an explicit scale (see
//! [`crate::forces::atmosphere::AltitudeScale`]).

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec3 - 3D Vector
// =============================================================================

/// A 3D vector used for positions, velocities and forces.
///
/// Y is up. Buoyancy and atmospheric lift act along +Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if magnitude is zero
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < constants::EPSILON {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).magnitude()
    }

    /// `self + other * scale`, the integrator's workhorse.
    pub fn add_scaled(&self, other: &Self, scale: f64) -> Self {
        *self + *other * scale
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

// =============================================================================
// Particle
// =============================================================================

/// A point mass with a force accumulator.
///
/// Mass is stored as its inverse so an immovable particle is simply one with
/// zero inverse mass. Force generators only ever *add* to the accumulator;
/// the world clears it once at the start of every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Constant acceleration applied on top of accumulated forces.
    pub acceleration: Vec3,
    /// Fraction of velocity kept after one second.
    pub damping: f64,
    inverse_mass: f64,
    force_accum: Vec3,
    last_acceleration: Vec3,
}

impl Particle {
    pub fn new(position: Vec3, mass: f64) -> Self {
        let mut particle = Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            damping: 1.0,
            inverse_mass: 0.0,
            force_accum: Vec3::ZERO,
            last_acceleration: Vec3::ZERO,
        };
        particle.set_mass(mass);
        particle
    }

    /// A particle that no force can move.
    pub fn immovable(position: Vec3) -> Self {
        Self {
            inverse_mass: 0.0,
            ..Self::new(position, 1.0)
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set a finite, positive mass.
    pub fn set_mass(&mut self, mass: f64) {
        debug_assert!(
            mass > 0.0 && mass.is_finite(),
            "particle mass must be positive and finite, got {}",
            mass
        );
        self.inverse_mass = 1.0 / mass;
    }

    /// Mass in kilograms, `f64::INFINITY` for immovable particles.
    pub fn mass(&self) -> f64 {
        if self.inverse_mass == 0.0 {
            f64::INFINITY
        } else {
            1.0 / self.inverse_mass
        }
    }

    pub fn inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    pub fn add_force(&mut self, force: Vec3) {
        self.force_accum += force;
    }

    pub fn clear_accumulator(&mut self) {
        self.force_accum = Vec3::ZERO;
    }

    /// Net force accumulated so far this tick.
    pub fn accumulated_force(&self) -> Vec3 {
        self.force_accum
    }

    /// Acceleration used by the most recent integration step.
    pub fn last_acceleration(&self) -> Vec3 {
        self.last_acceleration
    }

    pub(crate) fn set_last_acceleration(&mut self, acceleration: Vec3) {
        self.last_acceleration = acceleration;
    }
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Physical constants shared by the generators and demos.
pub mod constants {
    use super::Vec3;

    /// Gravitational acceleration used by the demos (m/s²)
    pub const GRAVITY: f64 = 9.81;

    /// Downward gravity vector
    pub const GRAVITY_VECTOR: Vec3 = Vec3::new(0.0, -GRAVITY, 0.0);

    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(a.add_scaled(&b, 0.5), Vec3::new(3.0, 4.5, 6.0));
    }

    #[test]
    fn test_vec3_normalized() {
        let n = Vec3::new(3.0, 4.0, 0.0).normalized();
        assert!((n.magnitude() - 1.0).abs() < 1e-10);
        assert!((n.x - 0.6).abs() < 1e-10);
        assert!((n.y - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_zero_vector_normalizes_to_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_particle_accumulates_forces() {
        let mut p = Particle::new(Vec3::ZERO, 2.0);
        p.add_force(Vec3::new(1.0, 0.0, 0.0));
        p.add_force(Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(p.accumulated_force(), Vec3::new(1.0, -3.0, 0.0));

        p.clear_accumulator();
        assert_eq!(p.accumulated_force(), Vec3::ZERO);
    }

    #[test]
    fn test_particle_mass_roundtrip() {
        let p = Particle::new(Vec3::ZERO, 4.0);
        assert!((p.mass() - 4.0).abs() < 1e-12);
        assert!((p.inverse_mass() - 0.25).abs() < 1e-12);
        assert!(p.has_finite_mass());
    }

    #[test]
    fn test_immovable_particle() {
        let p = Particle::immovable(Vec3::new(1.0, 2.0, 3.0));
        assert!(!p.has_finite_mass());
        assert!(p.mass().is_infinite());
    }
}
