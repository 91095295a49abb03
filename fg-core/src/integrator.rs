//! Numerical integrators for advancing particles in time.
//!
//! The world calls the integrator once per particle per tick, after every
//! force generator has contributed to the particle's accumulator.
//!
//! ## Algorithm (damped Euler)
//!
//! ```text
//! 1. x_new = x + v*dt
//! 2. a     = a_const + F_accum / m
//! 3. v_new = (v + a*dt) * damping^dt
//! ```
//!
//! Position is advanced with the old velocity, so a force applied this tick
//! first shows up in position on the next one. Raising damping to the
//! power `dt` keeps the drag independent of frame rate.

use crate::types::Particle;

/// Advances one particle by one timestep using its accumulated force.
pub trait Integrator {
    /// Integrate `particle` forward by `duration` seconds.
    ///
    /// Callers guarantee `duration > 0`. The force accumulator is read but
    /// not cleared; clearing belongs to the start of the next tick.
    fn integrate(&self, particle: &mut Particle, duration: f64);
}

/// Damped forward Euler integrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn integrate(&self, particle: &mut Particle, duration: f64) {
        // Immovable particles are not integrated.
        if !particle.has_finite_mass() {
            return;
        }

        particle.position = particle.position.add_scaled(&particle.velocity, duration);

        let acceleration = particle
            .acceleration
            .add_scaled(&particle.accumulated_force(), particle.inverse_mass());

        particle.velocity = particle.velocity.add_scaled(&acceleration, duration)
            * particle.damping.powf(duration);

        particle.set_last_acceleration(acceleration);
    }
}

// =============================================================================
// Tests
// =============================================================================
