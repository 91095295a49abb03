//! Anchored springs: one end fixed in space, the other on a particle.
//!
//! Both springs use the same Hooke rule along the anchor→particle line:
//!
//! ```text
//! e = position - anchor
//! F = normalize(e) · (rest_length - |e|) · k
//! ```
//!
//! Shorter than rest pushes the particle away from the anchor, longer pulls
//! it back. [`DeformingSpring`] additionally loses stiffness for good every
//! tick it spends stretched to `max_distance` or beyond.

use tracing::debug;

use super::{ForceContext, ForceGenerator};
use crate::types::{Particle, Vec3};

/// Stiffness kept per over-extended tick.
pub const FATIGUE_FACTOR: f64 = 0.999;

/// Force of a spring anchored at `anchor` acting on a particle at `position`.
pub fn anchored_spring_force(position: Vec3, anchor: Vec3, spring_constant: f64, rest_length: f64) -> Vec3 {
    let extension = position - anchor;
    let magnitude = (rest_length - extension.magnitude()) * spring_constant;
    extension.normalized() * magnitude
}

/// Plain anchored spring.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchoredSpring {
    pub anchor: Vec3,
    pub spring_constant: f64,
    pub rest_length: f64,
}

impl AnchoredSpring {
    pub fn new(anchor: Vec3, spring_constant: f64, rest_length: f64) -> Self {
        Self {
            anchor,
            spring_constant,
            rest_length,
        }
    }
}

impl ForceGenerator for AnchoredSpring {
    fn update_force(&mut self, particle: &mut Particle, _ctx: &ForceContext<'_>, _duration: f64) {
        particle.add_force(anchored_spring_force(
            particle.position,
            self.anchor,
            self.spring_constant,
            self.rest_length,
        ));
    }
}

/// How far a spring is stretched relative to its rest and max lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpringStretch {
    /// Shorter than the rest length.
    Compressed,
    /// Between rest length and max distance.
    Elastic,
    /// Past the max distance.
    Overextended,
}

/// Anchored spring that fatigues irreversibly when over-stretched.
#[derive(Debug, Clone, PartialEq)]
pub struct DeformingSpring {
    anchor: Vec3,
    spring_constant: f64,
    rest_length: f64,
    max_distance: f64,
    fatigued: bool,
}

impl DeformingSpring {
    pub fn new(anchor: Vec3, spring_constant: f64, rest_length: f64, max_distance: f64) -> Self {
        Self {
            anchor,
            spring_constant,
            rest_length,
            max_distance,
            fatigued: false,
        }
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Current stiffness; never increases.
    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    pub fn rest_length(&self) -> f64 {
        self.rest_length
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Whether the spring has ever been over-extended.
    pub fn is_fatigued(&self) -> bool {
        self.fatigued
    }

    pub fn extension(&self, position: Vec3) -> f64 {
        position.distance(&self.anchor)
    }

    pub fn stretch(&self, position: Vec3) -> SpringStretch {
        let length = self.extension(position);
        if length < self.rest_length {
            SpringStretch::Compressed
        } else if length > self.max_distance {
            SpringStretch::Overextended
        } else {
            SpringStretch::Elastic
        }
    }
}

impl ForceGenerator for DeformingSpring {
    fn update_force(&mut self, particle: &mut Particle, _ctx: &ForceContext<'_>, _duration: f64) {
        let length = self.extension(particle.position);

        if length >= self.max_distance {
            if !self.fatigued {
                debug!(
                    length,
                    max_distance = self.max_distance,
                    "spring over-extended, fatigue started"
                );
                self.fatigued = true;
            }
            self.spring_constant *= FATIGUE_FACTOR;
        }

        particle.add_force(anchored_spring_force(
            particle.position,
            self.anchor,
            self.spring_constant,
            self.rest_length,
        ));
    }
}
