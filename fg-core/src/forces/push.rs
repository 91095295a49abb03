//! Transient impulse: a fixed force held for a short window after a trigger.
//!
//! ```text
//! push(d) ──► remaining = T
//!   tick:  remaining > 0 ?  add d * amount; remaining -= dt
//!          otherwise       nothing
//! ```
//!
//! A new push overrides the one in progress; impulses never stack or queue.

use tracing::debug;

use super::{ForceContext, ForceGenerator};
use crate::types::{Particle, Vec3};

/// Pushes a particle in a direction for `total_duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Push {
    force_amount: f64,
    direction: Vec3,
    total_duration: f64,
    remaining: f64,
}

impl Push {
    /// An idle push generator; nothing happens until [`Push::push`].
    pub fn new(force_amount: f64, total_duration: f64) -> Self {
        Self {
            force_amount,
            direction: Vec3::ZERO,
            total_duration,
            remaining: 0.0,
        }
    }

    /// Start a new impulse window in `direction`, replacing any active one.
    pub fn push(&mut self, direction: Vec3) {
        debug!(
            direction = %direction,
            duration = self.total_duration,
            "push triggered"
        );
        self.direction = direction;
        self.remaining = self.total_duration;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds left in the current window; may be slightly negative once spent.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn force_amount(&self) -> f64 {
        self.force_amount
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }
}

impl ForceGenerator for Push {
    fn update_force(&mut self, particle: &mut Particle, _ctx: &ForceContext<'_>, duration: f64) {
        if self.remaining > 0.0 {
            particle.add_force(self.direction * self.force_amount);
            self.remaining -= duration;
        }
    }
}
