//! A crowd released from one point, spreading out under crowd separation.
//!
//! ```text
//!            world_radius
//!        .-------------------.
//!       /    o ◄──► o         \     pairs closer than crowding_radius
//!      |        o ◄──► o       |    push apart with k * (d - 2r)
//!       \                 ───► /◄── reaching the rim reverses velocity
//!        '-------------------'
//! ```

use std::f64::consts::TAU;

use fg_core::forces::CrowdSeparation;
use fg_core::scenes::OvercrowdingScene;
use fg_core::{GeneratorHandle, Particle, ParticleHandle, ParticleWorld, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::demo::{step_unless_paused, Demo, FrameOutcome, Readout};

pub struct OvercrowdingDemo {
    world: ParticleWorld,
    crowd: Vec<ParticleHandle>,
    separation: GeneratorHandle,
    world_radius: f64,
    seed: u64,
    paused: bool,
}

impl OvercrowdingDemo {
    pub fn new(scene: &OvercrowdingScene) -> Self {
        let seed = match scene.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                info!(seed, "no seed configured, drew a fresh one");
                seed
            }
        };
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut world = ParticleWorld::new();
        let separation = world.add_generator(CrowdSeparation::new(
            scene.crowding_radius,
            scene.spring_constant,
        ));

        let crowd = (0..scene.particle_count)
            .map(|_| {
                let speed = rng.gen_range(scene.speed_min..=scene.speed_max);
                let velocity = random_direction(&mut rng) * speed;
                let handle = world.add_particle(
                    Particle::new(Vec3::ZERO, scene.mass)
                        .with_velocity(velocity)
                        .with_damping(scene.damping),
                );
                world.register(handle, separation);
                handle
            })
            .collect();

        Self {
            world,
            crowd,
            separation,
            world_radius: scene.world_radius,
            seed,
            paused: false,
        }
    }

    pub fn crowd(&self) -> &[ParticleHandle] {
        &self.crowd
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Smallest distance between any two particles.
    pub fn closest_pair_distance(&self) -> Option<f64> {
        let positions: Vec<Vec3> = self.world.particles().map(|(_, p)| p.position).collect();
        let mut closest: Option<f64> = None;
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                let d = a.distance(b);
                closest = Some(closest.map_or(d, |c| c.min(d)));
            }
        }
        closest
    }

    fn bounce_off_rim(&mut self) {
        let radius = self.world_radius;
        for (handle, particle) in self.world.particles_mut() {
            if particle.position.magnitude() >= radius {
                particle.velocity = -particle.velocity;
                debug!(?handle, position = %particle.position, "bounced off world rim");
            }
        }
    }
}

/// Uniformly random unit vector.
///
/// Uniform `z` in `[-1, 1]` spreads directions evenly over the sphere.
fn random_direction(rng: &mut SmallRng) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let ring = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(ring * theta.cos(), ring * theta.sin(), z)
}

impl Demo for OvercrowdingDemo {
    fn title(&self) -> &'static str {
        "Overcrowding Demo"
    }

    fn update(&mut self, duration: f64) -> FrameOutcome {
        let outcome = step_unless_paused(&mut self.world, self.paused, duration);
        if let FrameOutcome::Tick(tick) = outcome {
            if tick.is_advanced() {
                self.bounce_off_rim();
            }
        }
        outcome
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn readout(&self) -> Readout {
        let mut readout = Readout::default();
        readout.push("particles", self.world.particle_count());
        readout.push("seed", self.seed);
        if let Some(d) = self.closest_pair_distance() {
            readout.push("closest pair", format!("{:.3}", d));
        }
        if let Some(fg_core::Generator::CrowdSeparation(crowd)) =
            self.world.generator(self.separation)
        {
            readout.push("crowding radius", crowd.crowding_radius());
        }
        readout
    }

    fn world(&self) -> &ParticleWorld {
        &self.world
    }
}
