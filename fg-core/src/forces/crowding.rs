//! Crowd separation: particles closer than a radius spring apart.
//!
//! For each neighbour inside `crowding_radius`, the subject receives the
//! force of an anchored spring whose anchor sits on that neighbour and whose
//! rest length is `2 · crowding_radius`. Inside the radius the spring is
//! always compressed, so every correction pushes the particles apart. The
//! per-tick force is the sum of the pairwise corrections.
//!
//! Scanning every neighbour makes one tick O(n²) over the crowd.

use super::spring::anchored_spring_force;
use super::{ForceContext, ForceGenerator};
use crate::types::Particle;

/// Pairwise repulsion between particles closer than `crowding_radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct CrowdSeparation {
    crowding_radius: f64,
    spring_constant: f64,
}

impl CrowdSeparation {
    pub fn new(crowding_radius: f64, spring_constant: f64) -> Self {
        Self {
            crowding_radius,
            spring_constant,
        }
    }

    pub fn crowding_radius(&self) -> f64 {
        self.crowding_radius
    }

    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    pub fn rest_length(&self) -> f64 {
        self.crowding_radius * 2.0
    }
}

impl ForceGenerator for CrowdSeparation {
    fn update_force(&mut self, particle: &mut Particle, ctx: &ForceContext<'_>, _duration: f64) {
        let position = particle.position;
        let rest_length = self.rest_length();

        for neighbour in ctx.neighbours {
            if neighbour.handle == ctx.subject {
                continue;
            }
            if position.distance(&neighbour.position) >= self.crowding_radius {
                continue;
            }
            particle.add_force(anchored_spring_force(
                position,
                neighbour.position,
                self.spring_constant,
                rest_length,
            ));
        }
    }
}
