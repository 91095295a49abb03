//! # FG Core
//!
//! Per-frame force generation for particle demos.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, Particle, constants)
//! - `arena`: Generational slot storage behind particle and generator handles
//! - `forces`: Force generators (gravity, push, buoyancy, lift, crowding, springs)
//! - `registry`: Ordered (particle, generator) associations run every tick
//! - `integrator`: Damped Euler integration
//! - `world`: Particle world and the tick loop
//! - `scenes`: YAML-based scene configuration loader

pub mod arena;
pub mod forces;
pub mod integrator;
pub mod registry;
pub mod scenes;
pub mod types;
pub mod world;

pub use forces::{ForceGenerator, Generator};
pub use registry::ForceRegistry;
pub use types::{Particle, Vec3};
pub use world::{GeneratorHandle, ParticleHandle, ParticleWorld, TickOutcome};
