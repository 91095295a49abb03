//! Force generators: rules that add force to a particle for the current tick.
//!
//! Every generator implements [`ForceGenerator`]. The world stores them as
//! the tagged [`Generator`] enum so one registry can drive any mix:
//!
//! - **Gravity**: `acceleration * mass`
//! - **Push**: a fixed force for a limited time after each trigger
//! - **Buoyancy**: liquid displacement, scaled by submerged fraction
//! - **AtmosphericLift**: lighter-than-air lift from ambient air density
//! - **CrowdSeparation**: pairwise springs pushing crowded particles apart
//! - **DeformingSpring**: anchored spring that fatigues when over-stretched
//! - **AnchoredSpring**: plain anchored spring
//!
//! ```text
//! tick ──► clear accumulators ──► registry ──► update_force(p, ctx, dt) ──► integrate
//!                                    │             (adds, never overwrites)
//!                                    └── registration order
//! ```

pub mod atmosphere;
pub mod buoyancy;
pub mod crowding;
pub mod gravity;
pub mod lift;
pub mod push;
pub mod spring;

pub use atmosphere::{AltitudeScale, Atmosphere};
pub use buoyancy::Buoyancy;
pub use crowding::CrowdSeparation;
pub use gravity::Gravity;
pub use lift::AtmosphericLift;
pub use push::Push;
pub use spring::{AnchoredSpring, DeformingSpring, SpringStretch};

use crate::types::{Particle, Vec3};
use crate::world::ParticleHandle;

/// Position of a live particle, captured at the start of the force phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    pub handle: ParticleHandle,
    pub position: Vec3,
}

/// What a generator may know about the world besides its own particle.
#[derive(Debug, Clone, Copy)]
pub struct ForceContext<'a> {
    /// The particle being updated.
    pub subject: ParticleHandle,
    /// Every live particle of the world, the subject included.
    pub neighbours: &'a [Neighbour],
}

/// Contributes force to one particle for one tick.
pub trait ForceGenerator {
    /// Add this generator's force for the current tick to `particle`.
    ///
    /// `duration` is the tick length in seconds and is always positive.
    fn update_force(&mut self, particle: &mut Particle, ctx: &ForceContext<'_>, duration: f64);
}

/// Every force model the world can register.
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    Gravity(Gravity),
    Push(Push),
    Buoyancy(Buoyancy),
    AtmosphericLift(AtmosphericLift),
    CrowdSeparation(CrowdSeparation),
    DeformingSpring(DeformingSpring),
    AnchoredSpring(AnchoredSpring),
}

impl Generator {
    /// Short name for logs and readouts.
    pub fn kind(&self) -> &'static str {
        match self {
            Generator::Gravity(_) => "gravity",
            Generator::Push(_) => "push",
            Generator::Buoyancy(_) => "buoyancy",
            Generator::AtmosphericLift(_) => "atmospheric_lift",
            Generator::CrowdSeparation(_) => "crowd_separation",
            Generator::DeformingSpring(_) => "deforming_spring",
            Generator::AnchoredSpring(_) => "anchored_spring",
        }
    }

    pub fn as_push_mut(&mut self) -> Option<&mut Push> {
        match self {
            Generator::Push(push) => Some(push),
            _ => None,
        }
    }

    pub fn as_push(&self) -> Option<&Push> {
        match self {
            Generator::Push(push) => Some(push),
            _ => None,
        }
    }

    pub fn as_lift(&self) -> Option<&AtmosphericLift> {
        match self {
            Generator::AtmosphericLift(lift) => Some(lift),
            _ => None,
        }
    }

    pub fn as_deforming_spring(&self) -> Option<&DeformingSpring> {
        match self {
            Generator::DeformingSpring(spring) => Some(spring),
            _ => None,
        }
    }
}

impl ForceGenerator for Generator {
    fn update_force(&mut self, particle: &mut Particle, ctx: &ForceContext<'_>, duration: f64) {
        match self {
            Generator::Gravity(g) => g.update_force(particle, ctx, duration),
            Generator::Push(g) => g.update_force(particle, ctx, duration),
            Generator::Buoyancy(g) => g.update_force(particle, ctx, duration),
            Generator::AtmosphericLift(g) => g.update_force(particle, ctx, duration),
            Generator::CrowdSeparation(g) => g.update_force(particle, ctx, duration),
            Generator::DeformingSpring(g) => g.update_force(particle, ctx, duration),
            Generator::AnchoredSpring(g) => g.update_force(particle, ctx, duration),
        }
    }
}

macro_rules! impl_from_generator {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Generator {
                fn from(generator: $variant) -> Self {
                    Generator::$variant(generator)
                }
            }
        )*
    };
}

impl_from_generator!(
    Gravity,
    Push,
    Buoyancy,
    AtmosphericLift,
    CrowdSeparation,
    DeformingSpring,
    AnchoredSpring,
);

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::arena::Arena;

    /// Run `generator` once against `particle` as the only particle in the world.
    pub fn apply_alone<G: ForceGenerator>(
        generator: &mut G,
        particle: &mut Particle,
        duration: f64,
    ) -> Vec3 {
        let mut arena: Arena<Particle> = Arena::new();
        let subject = arena.insert(particle.clone());
        let neighbours = [Neighbour {
            handle: subject,
            position: particle.position,
        }];
        let ctx = ForceContext {
            subject,
            neighbours: &neighbours,
        };
        let before = particle.accumulated_force();
        generator.update_force(particle, &ctx, duration);
        particle.accumulated_force() - before
    }
}
