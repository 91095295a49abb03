//! The particle world: particles, generators, registry and the tick loop.
//!
//! ```text
//! step(dt)
//!   ├─ dt <= 0 or not finite ──► Skipped (nothing touched)
//!   ├─ start_frame      clear every accumulator
//!   ├─ update_forces    registry runs generators in registration order
//!   └─ integrate        integrator advances every particle
//! ```
//!
//! A tick is all-or-nothing: a rejected duration leaves positions, impulse
//! countdowns and spring fatigue exactly as they were.

use tracing::debug;

use crate::arena::{Arena, Handle};
use crate::forces::{Generator, Neighbour};
use crate::integrator::{Euler, Integrator};
use crate::registry::ForceRegistry;
use crate::types::Particle;

pub type ParticleHandle = Handle<Particle>;
pub type GeneratorHandle = Handle<Generator>;

/// Why a tick was not run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    /// The frame duration was zero or negative.
    NonPositiveDuration(f64),
    /// The frame duration was NaN or infinite.
    NonFiniteDuration(f64),
}

/// Result of [`ParticleWorld::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The tick ran; `generators` is how many registrations were invoked.
    Advanced { generators: usize },
    Skipped(SkipReason),
}

impl TickOutcome {
    pub fn is_advanced(&self) -> bool {
        matches!(self, TickOutcome::Advanced { .. })
    }
}

/// Check a frame duration before any physics runs.
pub fn validate_duration(duration: f64) -> Result<f64, SkipReason> {
    if !duration.is_finite() {
        Err(SkipReason::NonFiniteDuration(duration))
    } else if duration <= 0.0 {
        Err(SkipReason::NonPositiveDuration(duration))
    } else {
        Ok(duration)
    }
}

/// Owns particles and generators and drives them one tick at a time.
pub struct ParticleWorld<I: Integrator = Euler> {
    particles: Arena<Particle>,
    generators: Arena<Generator>,
    registry: ForceRegistry,
    integrator: I,
    neighbours: Vec<Neighbour>,
    time: f64,
    ticks: u64,
}

impl Default for ParticleWorld<Euler> {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleWorld<Euler> {
    pub fn new() -> Self {
        Self::with_integrator(Euler)
    }
}

impl<I: Integrator> ParticleWorld<I> {
    pub fn with_integrator(integrator: I) -> Self {
        Self {
            particles: Arena::new(),
            generators: Arena::new(),
            registry: ForceRegistry::new(),
            integrator,
            neighbours: Vec::new(),
            time: 0.0,
            ticks: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Particles
    // -------------------------------------------------------------------------

    pub fn add_particle(&mut self, particle: Particle) -> ParticleHandle {
        self.particles.insert(particle)
    }

    /// Remove a particle. Its registrations stay until the caller drops them
    /// and are skipped while stale.
    pub fn remove_particle(&mut self, handle: ParticleHandle) -> Option<Particle> {
        self.particles.remove(handle)
    }

    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle> {
        self.particles.get(handle)
    }

    pub fn particle_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle> {
        self.particles.get_mut(handle)
    }

    pub fn particles(&self) -> impl Iterator<Item = (ParticleHandle, &Particle)> {
        self.particles.iter()
    }

    pub fn particles_mut(&mut self) -> impl Iterator<Item = (ParticleHandle, &mut Particle)> {
        self.particles.iter_mut()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    // -------------------------------------------------------------------------
    // Generators and registry
    // -------------------------------------------------------------------------

    pub fn add_generator(&mut self, generator: impl Into<Generator>) -> GeneratorHandle {
        self.generators.insert(generator.into())
    }

    pub fn remove_generator(&mut self, handle: GeneratorHandle) -> Option<Generator> {
        self.generators.remove(handle)
    }

    pub fn generator(&self, handle: GeneratorHandle) -> Option<&Generator> {
        self.generators.get(handle)
    }

    pub fn generator_mut(&mut self, handle: GeneratorHandle) -> Option<&mut Generator> {
        self.generators.get_mut(handle)
    }

    /// Shorthand for `registry_mut().add(particle, generator)`.
    pub fn register(&mut self, particle: ParticleHandle, generator: GeneratorHandle) {
        self.registry.add(particle, generator);
    }

    pub fn registry(&self) -> &ForceRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ForceRegistry {
        &mut self.registry
    }

    // -------------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------------

    /// Simulated seconds advanced so far.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Ticks that actually ran.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Clear every particle's force accumulator.
    pub fn start_frame(&mut self) {
        for (_, particle) in self.particles.iter_mut() {
            particle.clear_accumulator();
        }
    }

    /// Run the registry once. Returns the number of generators invoked.
    pub fn update_forces(&mut self, duration: f64) -> usize {
        self.neighbours.clear();
        self.neighbours
            .extend(self.particles.iter().map(|(handle, particle)| Neighbour {
                handle,
                position: particle.position,
            }));

        self.registry.update_forces(
            &mut self.particles,
            &mut self.generators,
            &self.neighbours,
            duration,
        )
    }

    /// Advance every particle with its accumulated force.
    pub fn integrate(&mut self, duration: f64) {
        for (_, particle) in self.particles.iter_mut() {
            self.integrator.integrate(particle, duration);
        }
    }

    /// Run one full tick, or nothing at all if `duration` is unusable.
    pub fn step(&mut self, duration: f64) -> TickOutcome {
        let duration = match validate_duration(duration) {
            Ok(duration) => duration,
            Err(reason) => {
                debug!(?reason, "tick skipped");
                return TickOutcome::Skipped(reason);
            }
        };

        self.start_frame();
        let generators = self.update_forces(duration);
        self.integrate(duration);

        self.time += duration;
        self.ticks += 1;
        TickOutcome::Advanced { generators }
    }
}

// =============================================================================
// Tests
// =============================================================================
