//! A ball hanging off a spring that gives out when stretched too far.

use fg_core::forces::{DeformingSpring, Push};
use fg_core::scenes::SpringScene;
use fg_core::{Generator, GeneratorHandle, Particle, ParticleHandle, ParticleWorld};

use crate::demo::{step_unless_paused, trigger_push, Demo, FrameOutcome, Readout};
use crate::input::Direction;

pub struct SpringDemo {
    world: ParticleWorld,
    ball: ParticleHandle,
    push: GeneratorHandle,
    spring: GeneratorHandle,
    paused: bool,
}

impl SpringDemo {
    pub fn new(scene: &SpringScene) -> Self {
        let mut world = ParticleWorld::new();
        let ball = world.add_particle(
            Particle::new(scene.start, scene.mass).with_damping(scene.damping),
        );
        let spring = world.add_generator(DeformingSpring::new(
            scene.anchor,
            scene.spring_constant,
            scene.rest_length,
            scene.max_distance,
        ));
        let push = world.add_generator(Push::new(scene.push.force, scene.push.duration));
        world.register(ball, spring);
        world.register(ball, push);

        Self {
            world,
            ball,
            push,
            spring,
            paused: false,
        }
    }

    pub fn ball(&self) -> ParticleHandle {
        self.ball
    }

    pub fn spring(&self) -> Option<&DeformingSpring> {
        self.world.generator(self.spring).and_then(Generator::as_deforming_spring)
    }
}

impl Demo for SpringDemo {
    fn title(&self) -> &'static str {
        "Spring Demo"
    }

    fn update(&mut self, duration: f64) -> FrameOutcome {
        step_unless_paused(&mut self.world, self.paused, duration)
    }

    fn push(&mut self, direction: Direction) {
        trigger_push(&mut self.world, self.push, direction.vector());
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn readout(&self) -> Readout {
        let mut readout = Readout::default();
        let ball = self.world.particle(self.ball);
        if let Some(ball) = ball {
            readout.particle(ball);
        }
        if let (Some(spring), Some(ball)) = (self.spring(), ball) {
            readout.push("spring constant", format!("{:.6}", spring.spring_constant()));
            readout.push("extension", format!("{:.3}", spring.extension(ball.position)));
            readout.push("stretch", format!("{:?}", spring.stretch(ball.position)));
        }
        readout
    }

    fn world(&self) -> &ParticleWorld {
        &self.world
    }
}
