//! The force registry: which generators run against which particles.
//!
//! The registry is an ordered list of (particle, generator) handle pairs. It
//! owns neither side; the world's arenas do. Each tick every association is
//! visited exactly once, in registration order, even when the generator has
//! nothing to add. Duplicate registrations are kept and contribute twice.

use tracing::trace;

use crate::arena::Arena;
use crate::forces::{ForceContext, ForceGenerator, Generator, Neighbour};
use crate::types::Particle;
use crate::world::{GeneratorHandle, ParticleHandle};

/// One (particle, generator) association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub particle: ParticleHandle,
    pub generator: GeneratorHandle,
}

/// Ordered (particle, generator) associations.
#[derive(Debug, Clone, Default)]
pub struct ForceRegistry {
    registrations: Vec<Registration>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `generator` to act on `particle` every tick.
    pub fn add(&mut self, particle: ParticleHandle, generator: GeneratorHandle) {
        self.registrations.push(Registration {
            particle,
            generator,
        });
    }

    /// Remove the first matching association. Returns whether one was found.
    pub fn remove(&mut self, particle: ParticleHandle, generator: GeneratorHandle) -> bool {
        let target = Registration {
            particle,
            generator,
        };
        match self.registrations.iter().position(|r| *r == target) {
            Some(index) => {
                self.registrations.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every association of `particle`. Returns how many were dropped.
    pub fn remove_particle(&mut self, particle: ParticleHandle) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.particle != particle);
        before - self.registrations.len()
    }

    /// Remove every association of `generator`. Returns how many were dropped.
    pub fn remove_generator(&mut self, generator: GeneratorHandle) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.generator != generator);
        before - self.registrations.len()
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }

    /// Run every registered generator against its particle.
    ///
    /// Associations whose particle or generator no longer exists are
    /// skipped. Returns the number of generators actually invoked.
    pub fn update_forces(
        &self,
        particles: &mut Arena<Particle>,
        generators: &mut Arena<Generator>,
        neighbours: &[Neighbour],
        duration: f64,
    ) -> usize {
        let mut invoked = 0;

        for registration in &self.registrations {
            let Some(particle) = particles.get_mut(registration.particle) else {
                trace!(particle = ?registration.particle, "skipping stale particle handle");
                continue;
            };
            let Some(generator) = generators.get_mut(registration.generator) else {
                trace!(generator = ?registration.generator, "skipping stale generator handle");
                continue;
            };

            let ctx = ForceContext {
                subject: registration.particle,
                neighbours,
            };
            generator.update_force(particle, &ctx, duration);
            invoked += 1;
        }

        invoked
    }
}
