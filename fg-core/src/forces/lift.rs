//! Lighter-than-air lift.
//!
//! The object's mass is fixed once from the density of helium at sea level.
//! Only the ambient air density changes with altitude, so the lift shrinks as
//! the object climbs and the object settles where lift matches its weight.

use super::atmosphere::{AltitudeScale, Atmosphere};
use super::{ForceContext, ForceGenerator};
use crate::types::{Particle, Vec3};

/// Upward force `air_density(altitude) · volume`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphericLift {
    volume: f64,
    scale: AltitudeScale,
    atmosphere: Atmosphere,
    rest_mass: f64,
    world_altitude: f64,
    air_density: f64,
    lift_force: f64,
}

impl AtmosphericLift {
    pub fn new(volume: f64, scale: AltitudeScale) -> Self {
        Self::with_atmosphere(volume, scale, Atmosphere::default())
    }

    pub fn with_atmosphere(volume: f64, scale: AltitudeScale, atmosphere: Atmosphere) -> Self {
        Self {
            volume,
            scale,
            atmosphere,
            rest_mass: atmosphere.helium_density(0.0) * volume,
            world_altitude: 0.0,
            air_density: 0.0,
            lift_force: 0.0,
        }
    }

    /// Mass of the helium-filled volume at sea level.
    pub fn rest_mass(&self) -> f64 {
        self.rest_mass
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn scale(&self) -> AltitudeScale {
        self.scale
    }

    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    /// World altitude (m) seen on the last update.
    pub fn world_altitude(&self) -> f64 {
        self.world_altitude
    }

    /// Air density seen on the last update.
    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    /// Lift applied on the last update.
    pub fn lift_force(&self) -> f64 {
        self.lift_force
    }

    /// Game altitude at which lift balances `gravity · rest_mass`, if the
    /// balance point lies inside the troposphere and above sea level.
    pub fn equilibrium_altitude(&self, gravity: f64) -> Option<f64> {
        let weight = gravity * self.rest_mass;
        let lift_at = |h: f64| self.atmosphere.air_density(h) * self.volume;

        let ceiling = self.atmosphere.ceiling() * 0.999;
        if lift_at(0.0) < weight || lift_at(ceiling) > weight {
            return None;
        }

        // Lift falls monotonically with altitude, so bisect.
        let (mut low, mut high) = (0.0, ceiling);
        for _ in 0..100 {
            let mid = 0.5 * (low + high);
            if lift_at(mid) > weight {
                low = mid;
            } else {
                high = mid;
            }
        }
        Some(self.scale.to_game(0.5 * (low + high)))
    }
}

impl ForceGenerator for AtmosphericLift {
    fn update_force(&mut self, particle: &mut Particle, _ctx: &ForceContext<'_>, _duration: f64) {
        self.world_altitude = self.scale.to_world(particle.position.y);
        self.air_density = self.atmosphere.air_density(self.world_altitude);
        self.lift_force = self.air_density * self.volume;

        particle.add_force(Vec3::UP * self.lift_force);
    }
}
